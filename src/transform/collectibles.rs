//! Collectibles transform

use super::types::{ApiCollectibles, Collectibles, Nameplate};

/// Transform wire collectibles into their internal variant.
///
/// An absent nameplate collapses the whole structure to an explicit `None`,
/// never a populated record with null sub-fields.
pub fn transform_collectibles(collectibles: ApiCollectibles) -> Collectibles {
    let Some(nameplate) = collectibles.nameplate else {
        return Collectibles { nameplate: None };
    };

    Collectibles {
        nameplate: Some(Nameplate {
            sku_id: nameplate.sku_id,
            asset: nameplate.asset,
            label: nameplate.label,
            palette: nameplate.palette,
        }),
    }
}
