use std::collections::{BTreeMap, BTreeSet};

use contracts::domain::a001_seller::aggregate::{MarketplaceName, Seller, SellerId};

use super::selection::Selection;

/// Which marketplaces each seller is connected to, built from the sellers
/// listing. The store does not know this mapping; pages use it to decide
/// which marketplace options to offer after the seller selection changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarketplaceAvailability {
    by_seller: BTreeMap<SellerId, BTreeSet<MarketplaceName>>,
}

impl MarketplaceAvailability {
    pub fn from_sellers(sellers: &[Seller]) -> Self {
        let by_seller = sellers
            .iter()
            .map(|seller| (seller.id, seller.marketplace_names().cloned().collect()))
            .collect();
        Self { by_seller }
    }

    /// Marketplaces reachable from `sellers`; every known one for "all".
    pub fn available_for(&self, sellers: &Selection<SellerId>) -> BTreeSet<MarketplaceName> {
        self.by_seller
            .iter()
            .filter(|(id, _)| sellers.contains(id))
            .flat_map(|(_, names)| names.iter().cloned())
            .collect()
    }

    /// Drops marketplaces none of `sellers` offers. Falls back to "all" when
    /// nothing is left.
    pub fn restrict(
        &self,
        marketplaces: &Selection<MarketplaceName>,
        sellers: &Selection<SellerId>,
    ) -> Selection<MarketplaceName> {
        match marketplaces {
            Selection::All => Selection::All,
            Selection::Specific(names) => {
                let available = self.available_for(sellers);
                names
                    .iter()
                    .filter(|name| available.contains(*name))
                    .cloned()
                    .collect()
            }
        }
    }
}

/// Sellers the signed-in user manages. An empty allow-list means the user is
/// not restricted.
pub fn visible_sellers(sellers: &[Seller], allowed: &[SellerId]) -> Vec<Seller> {
    if allowed.is_empty() {
        return sellers.to_vec();
    }
    sellers
        .iter()
        .filter(|seller| allowed.contains(&seller.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_seller::aggregate::{Marketplace, MarketplaceAccount};

    fn name(value: &str) -> MarketplaceName {
        MarketplaceName::new(value).unwrap()
    }

    fn seller(id: u64, marketplaces: &[&str]) -> Seller {
        Seller {
            id: SellerId(id),
            name: format!("Seller {}", id),
            logo_url: None,
            contact_email: None,
            is_active: true,
            marketplace_accounts: marketplaces
                .iter()
                .enumerate()
                .map(|(i, mp)| MarketplaceAccount {
                    id: i as i64,
                    seller_id: SellerId(id),
                    marketplace_id: i as i64,
                    seller_id_in_marketplace: format!("{}-{}", mp, id),
                    status: "CONNECTED".to_string(),
                    fulfillment_model: "FBM".to_string(),
                    connection_error: None,
                    last_order_sync: None,
                    marketplace: Marketplace {
                        id: i as i64,
                        name: name(mp),
                        logo_url: None,
                        is_active: true,
                    },
                })
                .collect(),
        }
    }

    fn sellers() -> Vec<Seller> {
        vec![seller(3, &["amazon", "noon"]), seller(5, &["amazon"]), seller(8, &[])]
    }

    #[test]
    fn test_available_for_selection() {
        let availability = MarketplaceAvailability::from_sellers(&sellers());
        let only_five: Selection<SellerId> = [SellerId(5)].into_iter().collect();
        assert_eq!(
            availability.available_for(&only_five),
            [name("amazon")].into_iter().collect()
        );
        assert_eq!(
            availability.available_for(&Selection::All),
            [name("amazon"), name("noon")].into_iter().collect()
        );
        let only_eight: Selection<SellerId> = [SellerId(8)].into_iter().collect();
        assert!(availability.available_for(&only_eight).is_empty());
    }

    #[test]
    fn test_restrict_drops_unreachable() {
        let availability = MarketplaceAvailability::from_sellers(&sellers());
        let picked: Selection<MarketplaceName> = [name("amazon"), name("noon")].into_iter().collect();
        let only_five: Selection<SellerId> = [SellerId(5)].into_iter().collect();
        assert_eq!(
            availability.restrict(&picked, &only_five),
            [name("amazon")].into_iter().collect()
        );

        let only_noon: Selection<MarketplaceName> = [name("noon")].into_iter().collect();
        assert_eq!(availability.restrict(&only_noon, &only_five), Selection::All);
        assert_eq!(
            availability.restrict(&Selection::All, &only_five),
            Selection::All
        );
    }

    #[test]
    fn test_visible_sellers() {
        let all = sellers();
        assert_eq!(visible_sellers(&all, &[]).len(), 3);
        let visible = visible_sellers(&all, &[SellerId(5), SellerId(42)]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, SellerId(5));
    }
}
