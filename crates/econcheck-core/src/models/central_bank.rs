/// A central bank the engine knows how to name in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralBank {
    /// Lowercase code used as the reference data key, e.g. `"boc"`.
    pub code: &'static str,
    pub name: &'static str,
    pub short: &'static str,
    pub currency: &'static str,
}

/// Registry of major central banks. The Fed comes first and has its own
/// dedicated categories; the rest feed the other-central-banks rules.
pub const CENTRAL_BANKS: [CentralBank; 8] = [
    CentralBank { code: "fed", name: "Federal Reserve", short: "Fed", currency: "USD" },
    CentralBank { code: "ecb", name: "European Central Bank", short: "ECB", currency: "EUR" },
    CentralBank { code: "boe", name: "Bank of England", short: "BoE", currency: "GBP" },
    CentralBank { code: "boj", name: "Bank of Japan", short: "BoJ", currency: "JPY" },
    CentralBank { code: "boc", name: "Bank of Canada", short: "BoC", currency: "CAD" },
    CentralBank { code: "rba", name: "Reserve Bank of Australia", short: "RBA", currency: "AUD" },
    CentralBank { code: "snb", name: "Swiss National Bank", short: "SNB", currency: "CHF" },
    CentralBank { code: "rbnz", name: "Reserve Bank of New Zealand", short: "RBNZ", currency: "NZD" },
];

pub fn central_bank(code: &str) -> Option<&'static CentralBank> {
    CENTRAL_BANKS.iter().find(|b| b.code == code)
}
