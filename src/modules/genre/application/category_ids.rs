use crate::modules::category::domain::CategoryId;
use crate::shared::errors::DomainError;
use crate::shared::validation::{ValidationError, ValidationHandler};

/// Parse raw category ids, reporting every malformed one to the handler.
pub(crate) fn parse_category_ids(
    raw: &[String],
    handler: &mut dyn ValidationHandler,
) -> Result<Vec<CategoryId>, DomainError> {
    let mut ids = Vec::with_capacity(raw.len());
    for value in raw {
        match value.trim().parse::<CategoryId>() {
            Ok(id) => ids.push(id),
            Err(_) => handler.append(ValidationError::new(format!(
                "'categories' contains an invalid id: {}",
                value
            )))?,
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::validation::Notification;

    #[test]
    fn keeps_valid_ids_and_reports_malformed_ones() {
        let valid = CategoryId::unique();
        let raw = vec![valid.to_string(), "123".to_string(), "abc".to_string()];

        let mut notification = Notification::create();
        let ids = parse_category_ids(&raw, &mut notification).unwrap();

        assert_eq!(ids, vec![valid]);
        assert_eq!(
            notification.messages(),
            vec![
                "'categories' contains an invalid id: 123",
                "'categories' contains an invalid id: abc",
            ]
        );
    }
}
