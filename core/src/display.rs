//! Enum → string helpers for the presentation layer.

use crate::{
    hall_of_fame::HallOfFameStatus,
    ledger::ReputationTier,
    legacy::LegacyTier,
    retirement::RetirementReason,
};

pub fn retirement_headline(gm_name: &str, reason: RetirementReason) -> String {
    match reason {
        RetirementReason::Voluntary => format!("{gm_name} Announces Retirement"),
        RetirementReason::Forced    => format!("{gm_name} Exits the League After No Offers Arrive"),
        RetirementReason::Health    => format!("{gm_name} Steps Away for Health Reasons"),
    }
}

pub fn legacy_tier_display_name(tier: LegacyTier) -> &'static str {
    tier.display_name()
}

pub fn hall_of_fame_status_display(status: HallOfFameStatus) -> &'static str {
    status.display()
}

pub fn reputation_tier_display(tier: ReputationTier) -> &'static str {
    match tier {
        ReputationTier::Elite    => "Elite",
        ReputationTier::High     => "Highly Regarded",
        ReputationTier::Moderate => "Respected",
        ReputationTier::Low      => "Questioned",
        ReputationTier::None     => "Unproven",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_names_the_gm() {
        for reason in [RetirementReason::Voluntary, RetirementReason::Forced, RetirementReason::Health] {
            assert!(retirement_headline("Pat Quinn", reason).starts_with("Pat Quinn"));
        }
    }
}
