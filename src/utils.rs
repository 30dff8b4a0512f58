use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{ImageFormat, Luma};
use js_sys::{Array, Reflect};
use qrcode::QrCode;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::models::{CurrencyOption, Network, PaymentRequest, Receipt, Token};

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Eight decimal places, then trailing zeros and a dangling point removed.
pub fn format_decimal(value: f64) -> String {
    format!("{:.8}", value)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

pub fn crypto_amount(request: &PaymentRequest, option: &CurrencyOption) -> String {
    format_decimal(request.amount * option.rate)
}

pub fn format_fiat(request: &PaymentRequest) -> String {
    format!("${} {}", format_decimal(request.amount), request.currency)
}

pub fn abbreviate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..10].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Seconds left on the payment window. Display only; nothing expires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn tick(self) -> Self {
        Self { remaining: self.remaining.saturating_sub(1) }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

/// "Copied" flag on the copy button. Each copy arms one reset; the flag
/// stays up until the reset of the latest copy has fired.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    pending: u32,
}

impl CopyFeedback {
    pub fn copied(self) -> Self {
        Self { pending: self.pending.saturating_add(1) }
    }

    pub fn expire(self) -> Self {
        Self { pending: self.pending.saturating_sub(1) }
    }

    pub fn is_shown(&self) -> bool {
        self.pending > 0
    }
}

pub fn qr_image_url(endpoint: &str, size: u32, data: &str) -> String {
    format!(
        "{}?size={}x{}&data={}",
        endpoint,
        size,
        size,
        urlencoding::encode(data)
    )
}

/// Renders `text` as a PNG QR code inside a data URL.
pub fn generate_qr_data_url(text: &str, size: u32) -> Result<String, String> {
    let qr_code = QrCode::new(text.as_bytes()).map_err(|e| format!("QR encoding failed: {}", e))?;
    let qr_image = qr_code.render::<Luma<u8>>().min_dimensions(size, size).build();

    let mut png_bytes: Vec<u8> = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut png_bytes);
    qr_image
        .write_to(&mut cursor, ImageFormat::Png)
        .map_err(|e| format!("PNG encoding failed: {}", e))?;

    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png_bytes)))
}

/// Payment link for wallet apps. The amount is only attached when the token
/// is the network's own coin, since token transfers need a contract call.
pub fn wallet_uri(option: &CurrencyOption, amount: &str) -> String {
    let native = matches!(
        (option.token, option.network),
        (Token::Btc, Network::Btc) | (Token::Eth, Network::Eth) | (Token::Bnb, Network::Bnb)
    );
    if native {
        format!("{}:{}?amount={}", option.network.uri_scheme(), option.address, amount)
    } else {
        format!("{}:{}", option.network.uri_scheme(), option.address)
    }
}

pub fn transaction_reference(bytes: [u8; 9]) -> String {
    const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let suffix: String = bytes
        .iter()
        .map(|b| ALPHABET[(*b % 36) as usize] as char)
        .collect();
    format!("tx_{}", suffix)
}

pub fn new_transaction_reference() -> Result<String, String> {
    let mut bytes = [0u8; 9];
    getrandom::getrandom(&mut bytes).map_err(|e| format!("No randomness available: {}", e))?;
    Ok(transaction_reference(bytes))
}

pub fn build_receipt(
    request: &PaymentRequest,
    option: &'static CurrencyOption,
    email: &str,
    reference: &str,
    date: &str,
) -> Receipt {
    Receipt {
        reference: reference.to_string(),
        date: date.to_string(),
        recipient: request.recipient.name.clone(),
        purpose: request.purpose.clone(),
        usd_amount: format_fiat(request),
        crypto_amount: crypto_amount(request, option),
        token: option.symbol(),
        network: option.network.code(),
        address: option.address,
        email: email.to_string(),
    }
}

pub fn local_date() -> String {
    let locale = window()
        .and_then(|w| w.navigator().language())
        .unwrap_or_else(|| "en-US".to_string());
    js_sys::Date::new_0()
        .to_locale_date_string(&locale, &JsValue::UNDEFINED)
        .into()
}

pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or("No window")?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(get_error_message)
}

pub fn open_external(url: &str) -> Result<(), String> {
    let window = window().ok_or("No window")?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(get_error_message)
}

pub fn download_receipt(receipt: &Receipt) -> Result<(), String> {
    let json = serde_json::to_string_pretty(receipt)
        .map_err(|e| format!("Receipt serialization failed: {}", e))?;

    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let parts = Array::of1(&JsValue::from_str(&json));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(get_error_message)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(get_error_message)?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let anchor = document
        .create_element("a")
        .map_err(get_error_message)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Not an anchor element".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&format!("receipt-{}.json", receipt.reference));
    anchor.click();

    Url::revoke_object_url(&url).map_err(get_error_message)
}

pub fn get_error_message(res: JsValue) -> String {
    if let Ok(message) = Reflect::get(&res, &"message".into()) {
        if let Some(s) = message.as_string() {
            return s;
        }
    }

    if let Some(s) = res.as_string() {
        return s;
    }

    if let Ok(str_val) = js_sys::JSON::stringify(&res) {
        if let Some(s) = str_val.as_string() {
            return s;
        }
    }

    "Unknown error (failed to extract message)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn decimal_trimming() {
        assert_eq!(format_decimal(150.0 * 0.000023), "0.00345");
        assert_eq!(format_decimal(150.0), "150");
        assert_eq!(format_decimal(0.255), "0.255");
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(100.5), "100.5");
    }

    #[test]
    fn crypto_amounts_for_the_default_request() {
        let request = PaymentRequest::default();
        assert_eq!(crypto_amount(&request, find("btc").unwrap()), "0.00345");
        assert_eq!(crypto_amount(&request, find("usdt-tron").unwrap()), "150");
        assert_eq!(crypto_amount(&request, find("eth").unwrap()), "0.0615");
        assert_eq!(format_fiat(&request), "$150 USD");
    }

    #[test]
    fn countdown_formatting() {
        let mut countdown = Countdown::new(900);
        assert_eq!(countdown.to_string(), "15:00");
        for _ in 0..61 {
            countdown = countdown.tick();
        }
        assert_eq!(countdown.to_string(), "13:59");
        assert_eq!(countdown.remaining(), 839);
    }

    #[test]
    fn countdown_stops_at_zero() {
        let countdown = Countdown::new(1).tick().tick();
        assert!(countdown.is_expired());
        assert_eq!(countdown.to_string(), "00:00");
    }

    #[test]
    fn a_second_copy_outlives_the_first_reset() {
        let twice = CopyFeedback::default().copied().copied();
        assert!(twice.expire().is_shown());
        assert!(!twice.expire().expire().is_shown());
        assert!(!CopyFeedback::default().expire().is_shown());
    }

    #[test]
    fn address_abbreviation() {
        assert_eq!(
            abbreviate_address("0x742d35Cc6634C0532925a3b8D34f8AB3"),
            "0x742d35Cc...4f8AB3"
        );
        assert_eq!(abbreviate_address("short"), "short");
    }

    #[test]
    fn qr_url_escapes_the_payload() {
        assert_eq!(
            qr_image_url("https://api.qrserver.com/v1/create-qr-code/", 200, "bc1qxy2"),
            "https://api.qrserver.com/v1/create-qr-code/?size=200x200&data=bc1qxy2"
        );
        assert!(qr_image_url("https://qr.test/", 100, "a b&c").ends_with("data=a%20b%26c"));
    }

    #[test]
    fn local_qr_is_a_png_data_url() {
        let url = generate_qr_data_url("bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh", 120).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        assert!(url.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn wallet_uris() {
        assert_eq!(
            wallet_uri(find("btc").unwrap(), "0.00345"),
            "bitcoin:bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh?amount=0.00345"
        );
        assert_eq!(
            wallet_uri(find("usdt-tron").unwrap(), "150"),
            "tron:TRX742d35Cc6634C0532925a3b8D34f8AB3"
        );
    }

    #[test]
    fn reference_format() {
        let reference = transaction_reference([0, 1, 35, 36, 71, 10, 200, 255, 9]);
        assert_eq!(reference, "tx_01z0zak39");
        assert_eq!(reference.len(), 12);
    }

    #[test]
    fn receipt_serializes_every_field() {
        let request = PaymentRequest::default();
        let receipt = build_receipt(
            &request,
            find("usdc-eth").unwrap(),
            "payer@example.com",
            "tx_abc123def",
            "10/19/2026",
        );
        let json: serde_json::Value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["token"], "USDC");
        assert_eq!(json["network"], "ETH");
        assert_eq!(json["crypto_amount"], "150");
        assert_eq!(json["usd_amount"], "$150 USD");
        assert_eq!(json["recipient"], "Alex Johnson");
        assert_eq!(json["email"], "payer@example.com");
    }
}
