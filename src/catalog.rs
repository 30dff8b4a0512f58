//! The fixed set of currencies the checkout accepts.

use crate::models::{CurrencyOption, Network, Token};

pub static CATALOG: [CurrencyOption; 9] = [
    CurrencyOption { id: "usdt-eth", token: Token::Usdt, network: Network::Eth, rate: 1.0, address: "0x742d35Cc6634C0532925a3b8D34f8AB3" },
    CurrencyOption { id: "usdt-bnb", token: Token::Usdt, network: Network::Bnb, rate: 1.0, address: "0x742d35Cc6634C0532925a3b8D34f8AB3" },
    CurrencyOption { id: "usdt-tron", token: Token::Usdt, network: Network::Tron, rate: 1.0, address: "TRX742d35Cc6634C0532925a3b8D34f8AB3" },
    CurrencyOption { id: "usdc-eth", token: Token::Usdc, network: Network::Eth, rate: 1.0, address: "0x742d35Cc6634C0532925a3b8D34f8AB4" },
    CurrencyOption { id: "usdc-bnb", token: Token::Usdc, network: Network::Bnb, rate: 1.0, address: "0x742d35Cc6634C0532925a3b8D34f8AB4" },
    CurrencyOption { id: "usdc-tron", token: Token::Usdc, network: Network::Tron, rate: 1.0, address: "TRX742d35Cc6634C0532925a3b8D34f8AB4" },
    CurrencyOption { id: "btc", token: Token::Btc, network: Network::Btc, rate: 0.000023, address: "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh" },
    CurrencyOption { id: "eth", token: Token::Eth, network: Network::Eth, rate: 0.00041, address: "0x742d35Cc6634C0532925a3b8D34f8AB5" },
    CurrencyOption { id: "bnb", token: Token::Bnb, network: Network::Bnb, rate: 0.0017, address: "0x742d35Cc6634C0532925a3b8D34f8AB6" },
];

#[cfg(test)]
pub fn find(id: &str) -> Option<&'static CurrencyOption> {
    CATALOG.iter().find(|o| o.id == id)
}

/// Every network offering for `token`, in catalog order.
pub fn options_for(token: Token) -> Vec<&'static CurrencyOption> {
    CATALOG.iter().filter(|o| o.token == token).collect()
}

/// A token needs an explicit network choice when it is offered on more
/// than one network.
pub fn is_multi_network(token: Token) -> bool {
    CATALOG.iter().filter(|o| o.token == token).nth(1).is_some()
}

/// Keeps the first option seen for each symbol.
pub fn unique_by_symbol<'a>(
    options: impl IntoIterator<Item = &'a CurrencyOption>,
) -> Vec<&'a CurrencyOption> {
    let mut unique: Vec<&CurrencyOption> = Vec::new();
    for option in options {
        if !unique.iter().any(|o| o.symbol() == option.symbol()) {
            unique.push(option);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            assert!(CATALOG.iter().skip(i + 1).all(|b| b.id != a.id), "duplicate id {}", a.id);
        }
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let symbols: Vec<&str> = unique_by_symbol(CATALOG.iter())
            .iter()
            .map(|o| o.symbol())
            .collect();
        assert_eq!(symbols, vec!["USDT", "USDC", "BTC", "ETH", "BNB"]);

        let first_usdt = unique_by_symbol(CATALOG.iter())[0];
        assert_eq!(first_usdt.id, "usdt-eth");
    }

    #[test]
    fn dedup_of_an_empty_list() {
        assert!(unique_by_symbol(std::iter::empty::<&CurrencyOption>()).is_empty());
    }

    #[test]
    fn options_for_filters_by_token() {
        let networks: Vec<Network> = options_for(Token::Usdc).iter().map(|o| o.network).collect();
        assert_eq!(networks, vec![Network::Eth, Network::Bnb, Network::Tron]);
        assert_eq!(options_for(Token::Btc).len(), 1);
    }

    #[test]
    fn only_stablecoins_span_networks() {
        assert!(is_multi_network(Token::Usdt));
        assert!(is_multi_network(Token::Usdc));
        assert!(!is_multi_network(Token::Btc));
        assert!(!is_multi_network(Token::Eth));
        assert!(!is_multi_network(Token::Bnb));
    }

    #[test]
    fn find_by_id() {
        let btc = find("btc").unwrap();
        assert_eq!(btc.rate, 0.000023);
        assert_eq!(btc.address, "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh");
        assert!(find("doge").is_none());
    }
}
