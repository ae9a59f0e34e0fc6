pub mod central_bank;
pub mod claim;
pub mod degradation_event;
pub mod expert;
pub mod outcome;
pub mod reference;
pub mod report;

pub use central_bank::{central_bank, CentralBank, CENTRAL_BANKS};
pub use claim::{ClaimValue, ExtractedClaim, Unit};
pub use degradation_event::DegradationEvent;
pub use expert::ExpertProfile;
pub use outcome::{CategoryReport, CitationDetail, ComparisonOutcome};
pub use reference::{
    CentralBankOutlook, DollarIndex, FedMeeting, FedMeetings, FedRates, ForexRates,
    InflationData, OtherCentralBanks, PairLevels, RateProbabilities, ReferencePayload,
    ReferenceSnapshot, TreasuryYields, UnemploymentData,
};
pub use report::ValidationReport;
