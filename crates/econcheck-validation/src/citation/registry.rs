//! The built-in registry of market analysts and their recent statements.

use econcheck_core::models::ExpertProfile;

/// Registered analysts, each with three statements they are on record for.
pub fn default_experts() -> Vec<ExpertProfile> {
    vec![
        ExpertProfile::new(
            "Adam Button",
            "ForexLive",
            &[
                "The Fed faces its most complex policy environment since 2020, balancing persistent inflation against emerging growth concerns.",
                "Markets are pricing in a 80% probability of a 25bp cut in September, reflecting a clear shift in Fed expectations.",
                "EUR/USD positioning suggests limited downside on hawkish surprise but significant upside potential on dovish outcome.",
            ],
        ),
        ExpertProfile::new(
            "Kathleen Brooks",
            "Minerva Analysis",
            &[
                "The Bank of Canada is likely to lead the major central banks in the easing cycle, with implications for CAD crosses.",
                "Technical indicators for USD/JPY suggest intervention risk increases substantially above the 149.00 level.",
                "Traders should watch for break of 1.1680-1.1750 range in EUR/USD for directional clarity following the FOMC.",
            ],
        ),
        ExpertProfile::new(
            "Kathy Lien",
            "BK Asset Management",
            &[
                "The convergence of multiple central bank decisions creates a perfect storm for currency volatility.",
                "Historical patterns show post-FOMC reversals within 24-48 hours are common in major currency pairs.",
                "USD/JPY remains the most sensitive pair to Fed-Japan yield differentials, with a 90% correlation to 10-year Treasury yields.",
            ],
        ),
        ExpertProfile::new(
            "Marc Chandler",
            "Bannockburn Global Forex",
            &[
                "The September FOMC meeting arrives amid conflicting economic signals that will test the Fed's communication strategy.",
                "Current market conditions favor USD strength on hawkish hold scenario, but traders must remain agile for surprise outcomes.",
                "The dot plot revisions will likely have more impact on currency markets than the immediate rate decision.",
            ],
        ),
        ExpertProfile::new(
            "John Hardy",
            "Saxo Bank",
            &[
                "Inflation language changes move USD 3x more than rate decisions alone in FOMC communications.",
                "The carry trade unwinding risk increases substantially with any dovish pivot from the Fed.",
                "GBP/USD faces double volatility risk with both FOMC and Bank of England policy influences.",
            ],
        ),
        ExpertProfile::new(
            "Erik Nelson",
            "Wells Fargo",
            &[
                "USD/CAD typically shows inverse correlation to broader USD moves post-FOMC decisions.",
                "The August inflation reading of 2.9% remains above the Fed's 2% target, creating policy tension.",
                "Market positioning suggests institutional traders are reducing exposure ahead of the FOMC event.",
            ],
        ),
        ExpertProfile::new(
            "Jane Foley",
            "Rabobank",
            &[
                "EUR/USD typically shows the strongest reaction among major pairs to FOMC decisions.",
                "The rise in unemployment to 4.3% suggests growing economic headwinds that the Fed cannot ignore.",
                "Correlation trading strategies become particularly effective during periods of central bank volatility.",
            ],
        ),
        ExpertProfile::new(
            "Kit Juckes",
            "Societe Generale",
            &[
                "The interest rate differential trade remains particularly sensitive to FOMC guidance and dot plot projections.",
                "Current yield spreads favor USD strength, but any dovish pivot could trigger rapid unwinding of carry positions.",
                "AUD/JPY serves as risk sentiment proxy during central bank volatility periods.",
            ],
        ),
    ]
}
