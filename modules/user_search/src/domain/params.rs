//! Validation of raw request parameters into [`QueryParameters`].

use query_core::{parse_non_negative, SortDir};

use crate::contract::error::Parameter;
use crate::contract::model::{OrderField, QueryParameters, SearchRequest};
use crate::domain::error::DomainError;

/// Checked in order: `limit`, `offset`, `order_field`, `order_by`; the first
/// failure is reported.
pub fn parse_request(
    request: &SearchRequest,
    default_order_field: OrderField,
) -> Result<QueryParameters, DomainError> {
    let limit = parse_count(Parameter::Limit, request.limit.as_deref())?;
    let offset = parse_count(Parameter::Offset, request.offset.as_deref())?;
    let order_field = parse_order_field(request.order_field.as_deref(), default_order_field)?;
    let order_by = parse_order_by(request.order_by.as_deref())?;

    Ok(QueryParameters {
        query: request.query.clone().unwrap_or_default(),
        order_field,
        order_by,
        limit,
        offset,
    })
}

fn parse_count(field: Parameter, raw: Option<&str>) -> Result<usize, DomainError> {
    let raw = raw.unwrap_or_default();
    parse_non_negative(raw).map_err(|e| DomainError::from_number(field, e))
}

/// Absent or empty selects `default`.
pub fn parse_order_field(
    raw: Option<&str>,
    default: OrderField,
) -> Result<OrderField, DomainError> {
    match raw {
        None | Some("") => Ok(default),
        Some(s) => s
            .parse::<OrderField>()
            .map_err(DomainError::unknown_order_field),
    }
}

pub fn parse_order_by(raw: Option<&str>) -> Result<SortDir, DomainError> {
    let raw = raw.unwrap_or_default();
    raw.parse::<SortDir>()
        .map_err(|_| DomainError::unknown_order_direction(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(limit: &str, offset: &str, field: Option<&str>, by: &str) -> SearchRequest {
        SearchRequest {
            query: Some("boyd".to_string()),
            order_field: field.map(str::to_string),
            order_by: Some(by.to_string()),
            limit: Some(limit.to_string()),
            offset: Some(offset.to_string()),
        }
    }

    #[test]
    fn parses_valid_request() {
        let params = parse_request(&request("10", "2", Some("Age"), "-1"), OrderField::Name)
            .expect("valid");
        assert_eq!(params.query, "boyd");
        assert_eq!(params.order_field, OrderField::Age);
        assert_eq!(params.order_by, SortDir::Desc);
        assert_eq!(params.limit, 10);
        assert_eq!(params.offset, 2);
    }

    #[test]
    fn missing_or_empty_order_field_uses_default() {
        let params = parse_request(&request("1", "0", None, "1"), OrderField::Id).unwrap();
        assert_eq!(params.order_field, OrderField::Id);

        let params = parse_request(&request("1", "0", Some(""), "1"), OrderField::Name).unwrap();
        assert_eq!(params.order_field, OrderField::Name);
    }

    #[test]
    fn missing_query_is_empty_term() {
        let mut req = request("1", "0", None, "1");
        req.query = None;
        assert_eq!(parse_request(&req, OrderField::Name).unwrap().query, "");
    }

    #[test]
    fn order_field_is_case_sensitive() {
        assert_eq!(
            parse_order_field(Some("name"), OrderField::Name),
            Err(DomainError::unknown_order_field("name"))
        );
    }

    #[test]
    fn rejects_bad_numbers() {
        assert_eq!(
            parse_request(&request("-1", "0", None, "1"), OrderField::Name),
            Err(DomainError::negative_value(Parameter::Limit, -1))
        );
        assert_eq!(
            parse_request(&request("5", "-3", None, "1"), OrderField::Name),
            Err(DomainError::negative_value(Parameter::Offset, -3))
        );
        assert_eq!(
            parse_request(&request("five", "0", None, "1"), OrderField::Name),
            Err(DomainError::not_an_integer(Parameter::Limit, "five"))
        );
    }

    #[test]
    fn missing_limit_is_not_an_integer() {
        let mut req = request("1", "0", None, "1");
        req.limit = None;
        assert_eq!(
            parse_request(&req, OrderField::Name),
            Err(DomainError::not_an_integer(Parameter::Limit, ""))
        );
    }

    #[test]
    fn rejects_bad_direction() {
        for raw in ["0", "2", "", "sideways"] {
            assert_eq!(
                parse_order_by(Some(raw)),
                Err(DomainError::unknown_order_direction(raw))
            );
        }
        assert_eq!(
            parse_order_by(None),
            Err(DomainError::unknown_order_direction(""))
        );
    }

    #[test]
    fn limit_is_checked_before_order_field() {
        let err = parse_request(&request("-1", "0", Some("Unknown"), "7"), OrderField::Name)
            .unwrap_err();
        assert!(matches!(err, DomainError::NegativeValue { field: Parameter::Limit, .. }));
    }
}
