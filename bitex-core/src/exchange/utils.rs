// =================================================================
// exchange/utils.rs - Utility Functions
// =================================================================

use super::ExchangeError;

/// Characters that would change the shape of a rendered path
const PATH_RESERVED: [char; 4] = ['/', '?', '#', '%'];

/// Substitute `{name}` placeholders in an endpoint path template.
///
/// Every placeholder must have a value; unbalanced braces are rejected.
/// Values are inserted verbatim, so a value carrying a path delimiter or
/// whitespace is refused rather than escaped.
pub fn render_path(template: &str, vars: &[(&str, &str)]) -> Result<String, ExchangeError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let close = after.find('}').ok_or_else(|| {
            ExchangeError::Config(format!("Unclosed placeholder in path '{}'", template))
        })?;
        let key = &after[..close];

        let value = vars
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
            .ok_or_else(|| {
                ExchangeError::Config(format!(
                    "No value for placeholder '{{{}}}' in path '{}'",
                    key, template
                ))
            })?;

        if value.is_empty()
            || value
                .chars()
                .any(|c| c.is_whitespace() || PATH_RESERVED.contains(&c))
        {
            return Err(ExchangeError::InvalidRequest(format!(
                "Value '{}' for '{{{}}}' cannot be used in a path",
                value, key
            )));
        }

        rendered.push_str(value);
        rest = &after[close + 1..];
    }

    if rest.contains('}') {
        return Err(ExchangeError::Config(format!(
            "Unbalanced '}}' in path '{}'",
            template
        )));
    }
    rendered.push_str(rest);

    Ok(rendered)
}

/// Normalise a currency code the way wallets are keyed
pub fn validate_currency(currency: &str) -> Result<String, ExchangeError> {
    let currency = currency.trim();
    if currency.is_empty() {
        return Err(ExchangeError::InvalidRequest(
            "Currency cannot be empty".to_string(),
        ));
    }
    if !currency.chars().all(char::is_alphanumeric) {
        return Err(ExchangeError::InvalidRequest(format!(
            "Currency '{}' contains invalid characters",
            currency
        )));
    }
    Ok(currency.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_path() {
        assert_eq!(
            render_path("/v1/pubticker/{pair}", &[("pair", "BTCUSD")]).unwrap(),
            "/v1/pubticker/BTCUSD"
        );
        assert_eq!(
            render_path("/orders/{order_id}/{pair}", &[("pair", "ETHBTC"), ("order_id", "42")])
                .unwrap(),
            "/orders/42/ETHBTC"
        );
        assert_eq!(render_path("/0/public/Time", &[]).unwrap(), "/0/public/Time");
    }

    #[test]
    fn test_render_path_rejects_bad_templates() {
        assert!(matches!(
            render_path("/ticker/{pair}", &[]),
            Err(ExchangeError::Config(_))
        ));
        assert!(render_path("/ticker/{pair", &[("pair", "X")]).is_err());
        assert!(render_path("/ticker/pair}", &[]).is_err());
    }

    #[test]
    fn test_render_path_rejects_unsafe_values() {
        for value in ["BTC/USD", "BTCUSD?x=1", "BTC#USD", "BTC%2FUSD", "BTC USD", ""] {
            assert!(
                matches!(
                    render_path("/v1/pubticker/{pair}", &[("pair", value)]),
                    Err(ExchangeError::InvalidRequest(_))
                ),
                "accepted {:?}",
                value
            );
        }
        assert!(render_path("/orders/{order_id}", &[("order_id", "../admin")]).is_err());
    }

    #[test]
    fn test_currency_validation() {
        assert_eq!(validate_currency(" btc ").unwrap(), "BTC");
        assert!(validate_currency("").is_err());
        assert!(validate_currency("US-D").is_err());
    }
}
