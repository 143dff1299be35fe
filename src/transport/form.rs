use crate::domain::PageQuery;

/// Query parameters for a listing endpoint.
pub fn encode_list_query(page: &PageQuery) -> Vec<(String, String)> {
    vec![
        ("limit".to_owned(), page.limit().to_string()),
        ("offset".to_owned(), page.offset().to_string()),
    ]
}

/// Form fields for `POST /v1/messages`. Each recipient becomes its own
/// repeated `to` field.
pub fn encode_create_message_form(
    to: &[impl AsRef<str>],
    sender_name: &str,
    message: &str,
) -> Vec<(String, String)> {
    let mut form = Vec::with_capacity(to.len() + 2);
    for recipient in to {
        form.push(("to".to_owned(), recipient.as_ref().to_owned()));
    }
    form.push(("sender_name".to_owned(), sender_name.to_owned()));
    form.push(("message".to_owned(), message.to_owned()));
    form
}

/// Form fields for `POST /v1/contacts`. `name` and `groups` are included
/// only when non-empty.
pub fn encode_create_contact_form(
    numero: &str,
    name: Option<&str>,
    groups: &[impl AsRef<str>],
) -> Vec<(String, String)> {
    let mut form = vec![("numero".to_owned(), numero.to_owned())];
    if let Some(name) = name {
        if !name.is_empty() {
            form.push(("name".to_owned(), name.to_owned()));
        }
    }
    for group in groups {
        form.push(("groups".to_owned(), group.as_ref().to_owned()));
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_field(form: &[(String, String)], key: &str, value: &str) {
        assert!(
            form.iter().any(|(k, v)| k == key && v == value),
            "missing field {key}={value}; got: {form:?}"
        );
    }

    #[test]
    fn list_query_carries_limit_and_offset() {
        let page = PageQuery::new(50, 100).unwrap();
        let query = encode_list_query(&page);
        assert_field(&query, "limit", "50");
        assert_field(&query, "offset", "100");
    }

    #[test]
    fn message_form_repeats_to_per_recipient() {
        let form = encode_create_message_form(&["624000001", "624000002"], "MYCOMPANY", "hello");

        let to_fields = form
            .iter()
            .filter(|(k, _)| k == "to")
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>();
        assert_eq!(to_fields, vec!["624000001", "624000002"]);
        assert_field(&form, "sender_name", "MYCOMPANY");
        assert_field(&form, "message", "hello");
    }

    #[test]
    fn contact_form_includes_optional_fields_only_when_present() {
        let form = encode_create_contact_form("624000001", None, &[] as &[&str]);
        assert_eq!(form, vec![("numero".to_owned(), "624000001".to_owned())]);

        let form = encode_create_contact_form("624000001", Some(""), &[] as &[&str]);
        assert_eq!(form, vec![("numero".to_owned(), "624000001".to_owned())]);

        let form = encode_create_contact_form("624000001", Some("Ada"), &["vip", "staff"]);
        assert_field(&form, "numero", "624000001");
        assert_field(&form, "name", "Ada");
        assert_field(&form, "groups", "vip");
        assert_field(&form, "groups", "staff");
    }
}
