use std::collections::HashMap;
use std::sync::OnceLock;

/// Resolves a localized display name for a currency code.
///
/// The upstream catalog frequently ships entries whose name is missing or
/// merely repeats the code; implementations of this trait supply a real
/// display name for those entries.
pub trait NameResolver: Send + Sync {
    fn display_name(&self, code: &str) -> Option<String>;
}

/// Identity fallback used when no name source is available: every lookup
/// misses and existing names are kept as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNames;

impl NameResolver for NoNames {
    fn display_name(&self, _code: &str) -> Option<String> {
        None
    }
}

/// English display names for common ISO 4217 and crypto codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl NameResolver for EnglishNames {
    fn display_name(&self, code: &str) -> Option<String> {
        display_names().get(code).map(|name| (*name).to_owned())
    }
}

static DISPLAY_NAMES: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

fn display_names() -> &'static HashMap<&'static str, &'static str> {
    DISPLAY_NAMES.get_or_init(|| {
        [
            ("AED", "United Arab Emirates Dirham"),
            ("ARS", "Argentine Peso"),
            ("AUD", "Australian Dollar"),
            ("BDT", "Bangladeshi Taka"),
            ("BGN", "Bulgarian Lev"),
            ("BHD", "Bahraini Dinar"),
            ("BOB", "Bolivian Boliviano"),
            ("BRL", "Brazilian Real"),
            ("CAD", "Canadian Dollar"),
            ("CHF", "Swiss Franc"),
            ("CLP", "Chilean Peso"),
            ("CNY", "Chinese Yuan"),
            ("COP", "Colombian Peso"),
            ("CRC", "Costa Rican Colon"),
            ("CZK", "Czech Koruna"),
            ("DKK", "Danish Krone"),
            ("DOP", "Dominican Peso"),
            ("EGP", "Egyptian Pound"),
            ("EUR", "Euro"),
            ("GBP", "British Pound"),
            ("GHS", "Ghanaian Cedi"),
            ("GTQ", "Guatemalan Quetzal"),
            ("HKD", "Hong Kong Dollar"),
            ("HUF", "Hungarian Forint"),
            ("IDR", "Indonesian Rupiah"),
            ("ILS", "Israeli New Shekel"),
            ("INR", "Indian Rupee"),
            ("ISK", "Icelandic Krona"),
            ("JMD", "Jamaican Dollar"),
            ("JOD", "Jordanian Dinar"),
            ("JPY", "Japanese Yen"),
            ("KES", "Kenyan Shilling"),
            ("KRW", "South Korean Won"),
            ("KWD", "Kuwaiti Dinar"),
            ("LKR", "Sri Lankan Rupee"),
            ("MAD", "Moroccan Dirham"),
            ("MXN", "Mexican Peso"),
            ("MYR", "Malaysian Ringgit"),
            ("NGN", "Nigerian Naira"),
            ("NOK", "Norwegian Krone"),
            ("NPR", "Nepalese Rupee"),
            ("NZD", "New Zealand Dollar"),
            ("OMR", "Omani Rial"),
            ("PEN", "Peruvian Sol"),
            ("PHP", "Philippine Peso"),
            ("PKR", "Pakistani Rupee"),
            ("PLN", "Polish Zloty"),
            ("PYG", "Paraguayan Guarani"),
            ("QAR", "Qatari Riyal"),
            ("RON", "Romanian Leu"),
            ("RUB", "Russian Ruble"),
            ("SAR", "Saudi Riyal"),
            ("SEK", "Swedish Krona"),
            ("SGD", "Singapore Dollar"),
            ("THB", "Thai Baht"),
            ("TND", "Tunisian Dinar"),
            ("TRY", "Turkish Lira"),
            ("TTD", "Trinidad and Tobago Dollar"),
            ("TWD", "New Taiwan Dollar"),
            ("TZS", "Tanzanian Shilling"),
            ("UAH", "Ukrainian Hryvnia"),
            ("UGX", "Ugandan Shilling"),
            ("USD", "US Dollar"),
            ("UYU", "Uruguayan Peso"),
            ("VND", "Vietnamese Dong"),
            ("XAF", "Central African CFA Franc"),
            ("XCD", "East Caribbean Dollar"),
            ("XOF", "West African CFA Franc"),
            ("ZAR", "South African Rand"),
            ("ADA", "Cardano"),
            ("BCH", "Bitcoin Cash"),
            ("BTC", "Bitcoin"),
            ("DOGE", "Dogecoin"),
            ("DOT", "Polkadot"),
            ("ETH", "Ethereum"),
            ("LTC", "Litecoin"),
            ("SOL", "Solana"),
            ("USDC", "USD Coin"),
            ("USDT", "Tether"),
            ("XRP", "XRP"),
        ]
        .into_iter()
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_codes() {
        assert_eq!(
            EnglishNames.display_name("USD"),
            Some(String::from("US Dollar"))
        );
        assert_eq!(
            EnglishNames.display_name("BTC"),
            Some(String::from("Bitcoin"))
        );
    }

    #[test]
    fn unknown_codes_miss() {
        assert_eq!(EnglishNames.display_name("ZZZ"), None);
        assert_eq!(NoNames.display_name("USD"), None);
    }
}
