//! Service catalog offered in the contact form

/// A single logistics offering: wire value and display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Fixed, ordered list of services. Order is what the selector shows.
pub const SERVICE_CATALOG: &[ServiceOption] = &[
    ServiceOption {
        value: "fleet",
        label: "Fleet Management",
    },
    ServiceOption {
        value: "contract",
        label: "Contract Logistics",
    },
    ServiceOption {
        value: "warehousing",
        label: "Warehousing Solutions",
    },
    ServiceOption {
        value: "cold",
        label: "Cold Chain Logistics",
    },
    ServiceOption {
        value: "cross",
        label: "Cross-State Shipping",
    },
    ServiceOption {
        value: "last",
        label: "Last Mile Delivery",
    },
];

/// Placeholder shown while no service is selected
pub const SERVICE_PLACEHOLDER: &str = "Select a service";

/// Short blurbs used by the services showcase
pub fn service_blurb(value: &str) -> &'static str {
    match value {
        "fleet" => "Dedicated trucks, live tracking and maintenance handled end to end.",
        "contract" => "Long-term logistics partnerships sized to your supply chain.",
        "warehousing" => "Secure storage, pick-and-pack and inventory visibility.",
        "cold" => "Temperature-controlled transport for food and pharma.",
        "cross" => "Reliable interstate freight with permits and compliance covered.",
        "last" => "Fast final-leg delivery to shops, homes and sites.",
        _ => "",
    }
}

/// Step through the catalog with wraparound via the unset slot.
///
/// `None` is the slot before the first entry, so cycling forward from the
/// last service returns to "no selection".
pub fn cycle_service(current: Option<usize>, forward: bool) -> Option<usize> {
    let len = SERVICE_CATALOG.len();
    match (current, forward) {
        (None, true) => Some(0),
        (None, false) => Some(len - 1),
        (Some(i), true) if i + 1 >= len => None,
        (Some(i), true) => Some(i + 1),
        (Some(0), false) => None,
        (Some(i), false) => Some(i - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let values: Vec<&str> = SERVICE_CATALOG.iter().map(|s| s.value).collect();
        assert_eq!(
            values,
            vec!["fleet", "contract", "warehousing", "cold", "cross", "last"]
        );
    }

    #[test]
    fn test_catalog_labels() {
        assert_eq!(SERVICE_CATALOG[0].label, "Fleet Management");
        assert_eq!(SERVICE_CATALOG[3].label, "Cold Chain Logistics");
        assert_eq!(SERVICE_CATALOG[5].label, "Last Mile Delivery");
    }

    #[test]
    fn test_every_service_has_blurb() {
        for service in SERVICE_CATALOG {
            assert!(!service_blurb(service.value).is_empty());
        }
        assert!(service_blurb("unknown").is_empty());
    }

    #[test]
    fn test_cycle_forward_wraps_through_unset() {
        assert_eq!(cycle_service(None, true), Some(0));
        assert_eq!(cycle_service(Some(0), true), Some(1));
        assert_eq!(cycle_service(Some(5), true), None);
    }

    #[test]
    fn test_cycle_backward_wraps_through_unset() {
        assert_eq!(cycle_service(None, false), Some(5));
        assert_eq!(cycle_service(Some(5), false), Some(4));
        assert_eq!(cycle_service(Some(0), false), None);
    }
}
