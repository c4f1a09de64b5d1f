use crate::types::Pack;

static PACKS: &[Pack] = &[
    Pack {
        id: "pack-lancement",
        name: "Lancement d'Entreprise",
        description: "Logo, charte graphique, site vitrine et stratégie \
                      digitale pour démarrer votre activité.",
        price_usd: 450,
        price_fc: 990_000,
        savings: "Économisez 450$ par rapport aux services à la carte",
    },
    Pack {
        id: "pack-pme",
        name: "Digitalisation PME",
        description: "Site e-commerce, chatbot IA et formation \
                      cybersécurité pour digitaliser votre PME.",
        price_usd: 900,
        price_fc: 1_980_000,
        savings: "Économisez 850$ par rapport aux services à la carte",
    },
];

/// Returns every bundled pack, in display order.
#[inline]
pub fn packs() -> &'static [Pack] {
    PACKS
}

/// Looks up a pack by its identifier.
pub fn find_pack(id: &str) -> Option<&'static Pack> {
    PACKS.iter().find(|pack| pack.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_pack() {
        assert_eq!(
            find_pack("pack-lancement").unwrap().name,
            "Lancement d'Entreprise"
        );
        assert_eq!(find_pack("pack-pme").unwrap().price_usd, 900);
        assert!(find_pack("pack-inconnu").is_none());
    }
}
