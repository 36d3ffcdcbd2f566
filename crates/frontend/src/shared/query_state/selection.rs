use std::collections::BTreeSet;
use std::fmt;

use contracts::domain::a001_seller::aggregate::{MarketplaceName, SellerId};
use contracts::error::ParseTokenError;
use contracts::shared::query_params::{ALL_MARKETPLACES, ALL_SELLERS};

/// A value that can be selected in a dashboard multi-select.
///
/// `ALL_TOKEN` is the sentinel the address bar uses for the "everything"
/// option; it never appears inside a [`Selection`].
pub trait SelectionKey: Ord + Clone + fmt::Display {
    const ALL_TOKEN: &'static str;

    fn parse_token(token: &str) -> Result<Self, ParseTokenError>;
}

impl SelectionKey for SellerId {
    const ALL_TOKEN: &'static str = ALL_SELLERS;

    fn parse_token(token: &str) -> Result<Self, ParseTokenError> {
        token.parse()
    }
}

impl SelectionKey for MarketplaceName {
    const ALL_TOKEN: &'static str = ALL_MARKETPLACES;

    fn parse_token(token: &str) -> Result<Self, ParseTokenError> {
        MarketplaceName::new(token)
    }
}

/// One checked entry of a multi-select: the "all" option or a concrete item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SelectOption<T> {
    All,
    Item(T),
}

impl<T: SelectionKey> SelectOption<T> {
    pub fn parse(token: &str) -> Result<Self, ParseTokenError> {
        let token = token.trim();
        if token == T::ALL_TOKEN {
            Ok(SelectOption::All)
        } else {
            T::parse_token(token).map(SelectOption::Item)
        }
    }

    pub fn token(&self) -> String {
        match self {
            SelectOption::All => T::ALL_TOKEN.to_string(),
            SelectOption::Item(item) => item.to_string(),
        }
    }
}

/// Filter over a set of values: either no filter at all, or a non-empty set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T: Ord> {
    All,
    Specific(BTreeSet<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Ord + Clone> Selection<T> {
    /// Resolves the checked options of a multi-select against the previous
    /// selection:
    /// - nothing checked (or only "all") selects everything;
    /// - checking "all" next to concrete items selects everything, unless
    ///   "all" was already active, in which case the concrete items win.
    pub fn resolve<I>(previous: &Selection<T>, options: I) -> Selection<T>
    where
        I: IntoIterator<Item = SelectOption<T>>,
    {
        let mut wants_all = false;
        let mut items = BTreeSet::new();
        for option in options {
            match option {
                SelectOption::All => wants_all = true,
                SelectOption::Item(item) => {
                    items.insert(item);
                }
            }
        }

        if items.is_empty() {
            return Selection::All;
        }
        if wants_all && !previous.is_all() {
            return Selection::All;
        }
        Selection::Specific(items)
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// The explicit set, or `None` when nothing is filtered.
    pub fn specific(&self) -> Option<&BTreeSet<T>> {
        match self {
            Selection::All => None,
            Selection::Specific(items) => Some(items),
        }
    }

    pub fn contains(&self, item: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Specific(items) => items.contains(item),
        }
    }

    /// Checked options as a multi-select would show them.
    pub fn to_options(&self) -> Vec<SelectOption<T>> {
        match self {
            Selection::All => vec![SelectOption::All],
            Selection::Specific(items) => items.iter().cloned().map(SelectOption::Item).collect(),
        }
    }

    /// Checked options after the user clicks `option`.
    pub fn toggled(&self, option: SelectOption<T>) -> Vec<SelectOption<T>> {
        let mut options = self.to_options();
        if let Some(pos) = options.iter().position(|o| *o == option) {
            options.remove(pos);
        } else {
            options.push(option);
        }
        options
    }
}

impl<T: SelectionKey> Selection<T> {
    /// Sorted tokens of the explicit set, `None` for "all".
    pub fn tokens(&self) -> Option<Vec<String>> {
        self.specific()
            .map(|items| items.iter().map(|item| item.to_string()).collect())
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: BTreeSet<T> = iter.into_iter().collect();
        if items.is_empty() {
            Selection::All
        } else {
            Selection::Specific(items)
        }
    }
}
