use std::fmt;

use serde::{Deserialize, Serialize};

pub const GENERIC_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 32 32'%3E%3Ccircle cx='16' cy='16' r='16' fill='%23F3F4F6'/%3E%3Cpath d='M16 6l1.5 8.3L26 16l-8.5 1.7L16 26l-1.5-8.3L6 16l8.5-1.7z' fill='%236B7280'/%3E%3C/svg%3E";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Recipient {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaymentRequest {
    pub recipient: Recipient,
    pub purpose: String,
    pub amount: f64,
    pub currency: String,
}

impl Default for PaymentRequest {
    fn default() -> Self {
        Self {
            recipient: Recipient {
                name: "Alex Johnson".into(),
                handle: "@alexjohnson".into(),
                avatar: "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&fit=crop".into(),
            },
            purpose: "Consultation Services".into(),
            amount: 150.0,
            currency: "USD".into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentMethod {
    Crypto,
    Fiat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Usdt,
    Usdc,
    Btc,
    Eth,
    Bnb,
}

impl Token {
    pub fn symbol(&self) -> &'static str {
        match self {
            Token::Usdt => "USDT",
            Token::Usdc => "USDC",
            Token::Btc => "BTC",
            Token::Eth => "ETH",
            Token::Bnb => "BNB",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Token::Usdt => "Tether",
            Token::Usdc => "USD Coin",
            Token::Btc => "Bitcoin",
            Token::Eth => "Ethereum",
            Token::Bnb => "BNB",
        }
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            Token::Usdt => "https://cryptologos.cc/logos/tether-usdt-logo.png",
            Token::Usdc => "https://cryptologos.cc/logos/usd-coin-usdc-logo.png",
            Token::Btc => "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
            Token::Eth => "https://cryptologos.cc/logos/ethereum-eth-logo.png",
            Token::Bnb => "https://cryptologos.cc/logos/bnb-bnb-logo.png",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Eth,
    Bnb,
    Tron,
    Btc,
}

impl Network {
    pub fn code(&self) -> &'static str {
        match self {
            Network::Eth => "ETH",
            Network::Bnb => "BNB",
            Network::Tron => "TRON",
            Network::Btc => "BTC",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Network::Eth => "badge-eth",
            Network::Bnb => "badge-bnb",
            Network::Tron => "badge-tron",
            Network::Btc => "badge-btc",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Network::Eth => "Ethereum Network - Higher fees, most secure",
            Network::Bnb => "BNB Smart Chain - Lower fees, fast transactions",
            Network::Tron => "TRON Network - Lowest fees, very fast",
            Network::Btc => "Bitcoin Network",
        }
    }

    pub fn icon_url(&self) -> &'static str {
        match self {
            Network::Eth => "https://cryptologos.cc/logos/ethereum-eth-logo.png",
            Network::Bnb => "https://cryptologos.cc/logos/bnb-bnb-logo.png",
            Network::Tron => "https://cryptologos.cc/logos/tron-trx-logo.png",
            Network::Btc => "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
        }
    }

    pub fn uri_scheme(&self) -> &'static str {
        match self {
            Network::Eth => "ethereum",
            Network::Bnb => "bnb",
            Network::Tron => "tron",
            Network::Btc => "bitcoin",
        }
    }

    pub fn explorer_address_url(&self, address: &str) -> String {
        match self {
            Network::Eth => format!("https://etherscan.io/address/{}", address),
            Network::Bnb => format!("https://bscscan.com/address/{}", address),
            Network::Tron => format!("https://tronscan.org/#/address/{}", address),
            Network::Btc => format!("https://mempool.space/address/{}", address),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One (token, network) offering the payer can send to.
#[derive(Debug, PartialEq)]
pub struct CurrencyOption {
    pub id: &'static str,
    pub token: Token,
    pub network: Network,
    /// Units of `token` per USD.
    pub rate: f64,
    pub address: &'static str,
}

impl CurrencyOption {
    pub fn symbol(&self) -> &'static str {
        self.token.symbol()
    }

    pub fn name(&self) -> &'static str {
        self.token.name()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    MethodSelect,
    CryptoSelect,
    NetworkSelect,
    Confirmation,
    EmailCapture,
    AddressDisplay,
    Success,
}

impl Step {
    pub fn number(&self) -> u8 {
        match self {
            Step::MethodSelect => 1,
            Step::CryptoSelect => 2,
            Step::NetworkSelect => 3,
            Step::Confirmation => 4,
            Step::EmailCapture => 5,
            Step::AddressDisplay => 6,
            Step::Success => 7,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::MethodSelect => "Choose Payment Method",
            Step::CryptoSelect => "Select Cryptocurrency",
            Step::NetworkSelect => "Select Network",
            Step::Confirmation => "Confirm Payment",
            Step::EmailCapture => "Email Address",
            Step::AddressDisplay => "Send Payment",
            Step::Success => "Payment Received",
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Receipt {
    pub reference: String,
    pub date: String,
    pub recipient: String,
    pub purpose: String,
    pub usd_amount: String,
    pub crypto_amount: String,
    pub token: &'static str,
    pub network: &'static str,
    pub address: &'static str,
    pub email: String,
}
