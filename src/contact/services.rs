/// A choice in the contact form's service menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SERVICES: &[ServiceOption] = &[
    ServiceOption { value: "consult", label: "Консультація" },
    ServiceOption { value: "web", label: "Веб-розробка" },
    ServiceOption { value: "design", label: "UI/UX дизайн" },
    ServiceOption { value: "marketing", label: "Цифровий маркетинг" },
    ServiceOption { value: "support", label: "Підтримка та супровід" },
];

pub fn service_label(value: &str) -> Option<&'static str> {
    SERVICES
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looks_up_known_values() {
        assert_eq!(service_label("consult"), Some("Консультація"));
        assert_eq!(service_label(""), None);
        assert_eq!(service_label("CONSULT"), None);
    }

    #[test]
    fn values_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            assert!(SERVICES[i + 1..].iter().all(|b| b.value != a.value));
        }
    }
}
