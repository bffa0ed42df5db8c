use std::fmt::Write as _;

use crate::theme::Branding;

const WHATSAPP_BASE_URL: &str = "https://wa.me";
const MIN_PHONE_DIGITS: usize = 7;

/// Static currency record. No conversion happens between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub minor_digits: u8,
}

impl Currency {
    pub const USD: Currency = Currency::new("USD", "$", 2);
    pub const EUR: Currency = Currency::new("EUR", "€", 2);
    pub const MXN: Currency = Currency::new("MXN", "$", 2);
    pub const ARS: Currency = Currency::new("ARS", "$", 2);
    pub const COP: Currency = Currency::new("COP", "$", 2);
    pub const CLP: Currency = Currency::new("CLP", "$", 0);
    pub const PEN: Currency = Currency::new("PEN", "S/", 2);
    pub const BRL: Currency = Currency::new("BRL", "R$", 2);

    pub const fn new(code: &'static str, symbol: &'static str, minor_digits: u8) -> Self {
        Self {
            code,
            symbol,
            minor_digits,
        }
    }

    pub fn all() -> &'static [Currency] {
        const CURRENCIES: [Currency; 8] = [
            Currency::USD,
            Currency::EUR,
            Currency::MXN,
            Currency::ARS,
            Currency::COP,
            Currency::CLP,
            Currency::PEN,
            Currency::BRL,
        ];
        &CURRENCIES
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        Self::all()
            .iter()
            .copied()
            .find(|currency| currency.code.eq_ignore_ascii_case(code))
    }

    /// `1234550` minor units of USD → `$12,345.50`.
    pub fn format_minor(&self, amount_minor: u64) -> String {
        let scale = 10u64.pow(u32::from(self.minor_digits));
        let whole = group_thousands(amount_minor / scale);
        if self.minor_digits == 0 {
            return format!("{}{whole}", self.symbol);
        }
        let fraction = amount_minor % scale;
        format!(
            "{}{whole}.{fraction:0width$}",
            self.symbol,
            width = usize::from(self.minor_digits)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
    pub unit_price_minor: u64,
}

impl CartLine {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price_minor: u64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price_minor,
        }
    }

    pub fn total_minor(&self) -> u64 {
        self.unit_price_minor.saturating_mul(u64::from(self.quantity))
    }
}

pub fn format_order_message(store_name: &str, lines: &[CartLine], currency: Currency) -> String {
    let mut message = format!("Hello {}! I'd like to place this order:\n", store_name.trim());
    let mut total: u64 = 0;
    for line in lines.iter().filter(|line| line.quantity > 0) {
        let line_total = line.total_minor();
        total = total.saturating_add(line_total);
        let _ = writeln!(
            message,
            "- {} x {}: {}",
            line.quantity,
            line.name.trim(),
            currency.format_minor(line_total)
        );
    }
    let _ = write!(
        message,
        "Total: {} {}",
        currency.format_minor(total),
        currency.code
    );
    message
}

/// `wa.me` link for the store's contact phone, or `None` when the branding
/// has no usable phone or the cart is empty.
pub fn whatsapp_checkout_url(
    branding: &Branding,
    store_name: &str,
    lines: &[CartLine],
    currency: Currency,
) -> Option<String> {
    let phone = whatsapp_phone(branding.contact_phone.as_deref()?)?;
    if lines.iter().all(|line| line.quantity == 0) {
        return None;
    }
    let message = format_order_message(store_name, lines, currency);
    Some(format!(
        "{WHATSAPP_BASE_URL}/{phone}?text={}",
        urlencoding::encode(&message)
    ))
}

fn whatsapp_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        tracing::debug!(digits = digits.len(), "contact phone too short for whatsapp");
        return None;
    }
    Some(digits)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, c) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
