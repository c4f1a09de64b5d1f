//! The running quote selection and its totals.

use julia_catalog::{Pack, Service};

/// One line of the selection: a service, or the pack standing in for
/// the whole selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SelectionItem {
    /// An itemized service.
    Service(Service),
    /// A bundled pack.
    Pack(Pack),
}

impl SelectionItem {
    /// Stable identifier of the underlying catalog line.
    #[inline]
    pub fn id(&self) -> &'static str {
        match self {
            SelectionItem::Service(service) => service.id,
            SelectionItem::Pack(pack) => pack.id,
        }
    }

    /// Display name of the underlying catalog line.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            SelectionItem::Service(service) => service.name,
            SelectionItem::Pack(pack) => pack.name,
        }
    }

    /// Price in US dollars.
    #[inline]
    pub fn price_usd(&self) -> u32 {
        match self {
            SelectionItem::Service(service) => service.price_usd,
            SelectionItem::Pack(pack) => pack.price_usd,
        }
    }

    /// Price in Congolese francs.
    #[inline]
    pub fn price_fc(&self) -> u64 {
        match self {
            SelectionItem::Service(service) => service.price_fc,
            SelectionItem::Pack(pack) => pack.price_fc,
        }
    }
}

/// Selection totals in both currencies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Totals {
    /// Sum of the USD prices over the selection.
    pub usd: u32,
    /// Sum of the FC prices over the selection.
    pub fc: u64,
}

/// The ordered, id-unique set of selected services or pack.
///
/// Totals are recomputed from the current set on every call; nothing is
/// cached or invalidated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    items: Vec<SelectionItem>,
}

impl Selection {
    /// Toggles a service: removes it when present, appends it when
    /// absent. Returns `true` when the service was added.
    pub fn toggle_service(&mut self, service: Service) -> bool {
        if let Some(pos) =
            self.items.iter().position(|item| item.id() == service.id)
        {
            self.items.remove(pos);
            false
        } else {
            self.items.push(SelectionItem::Service(service));
            true
        }
    }

    /// Replaces the entire selection with the single pack.
    ///
    /// A pack never merges with a prior itemized selection.
    pub fn replace_with_pack(&mut self, pack: Pack) {
        self.items.clear();
        self.items.push(SelectionItem::Pack(pack));
    }

    /// Computes the totals over the current selection.
    ///
    /// Returns zero totals for an empty selection.
    pub fn totals(&self) -> Totals {
        Totals {
            usd: self.items.iter().map(SelectionItem::price_usd).sum(),
            fc: self.items.iter().map(SelectionItem::price_fc).sum(),
        }
    }

    /// The selected items, in insertion order.
    #[inline]
    pub fn items(&self) -> &[SelectionItem] {
        &self.items
    }

    /// Display names of the selected items, for the submission payload.
    pub fn names(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.name().to_owned())
            .collect()
    }

    /// Whether nothing is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Empties the selection.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use julia_catalog::{find_pack, find_service};

    use super::*;

    #[test]
    fn test_empty_totals() {
        assert_eq!(Selection::default().totals(), Totals { usd: 0, fc: 0 });
    }

    #[test]
    fn test_toggle_parity() {
        // A service toggled an odd number of times is in the selection,
        // an even number of times is not.
        let site = *find_service("site-vitrine").unwrap();
        let logo = *find_service("logo").unwrap();
        let video = *find_service("montage-video").unwrap();

        let mut selection = Selection::default();
        for service in [site, logo, site, video, site, logo] {
            selection.toggle_service(service);
        }

        // site: 3 toggles, logo: 2, video: 1.
        let ids: Vec<_> =
            selection.items().iter().map(SelectionItem::id).collect();
        assert_eq!(ids, ["montage-video", "site-vitrine"]);

        let totals = selection.totals();
        assert_eq!(totals.usd, site.price_usd + video.price_usd);
        assert_eq!(totals.fc, site.price_fc + video.price_fc);
    }

    #[test]
    fn test_scenario_totals() {
        let mut selection = Selection::default();
        selection.toggle_service(*find_service("site-vitrine").unwrap());
        selection.toggle_service(*find_service("logo").unwrap());
        assert_eq!(
            selection.totals(),
            Totals {
                usd: 450,
                fc: 990_000
            }
        );
    }

    #[test]
    fn test_pack_replaces_selection() {
        let mut selection = Selection::default();
        selection.toggle_service(*find_service("site-vitrine").unwrap());
        selection.toggle_service(*find_service("logo").unwrap());

        let pack = *find_pack("pack-lancement").unwrap();
        selection.replace_with_pack(pack);

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.items()[0].id(), "pack-lancement");
        assert_eq!(selection.totals().usd, 450);
    }
}
