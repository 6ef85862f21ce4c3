//! Category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A goal category (Value Object)
///
/// Closed enumeration of the business and document domains escriba
/// knows how to write for. Exactly one category is primary per
/// request; zero or more act as collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    StrategicPlanning,
    CompetitiveAnalysis,
    SalesAnalysis,
    ProductManagement,
    UserManagement,
    TaskManagement,
    FinancialAnalysis,
    HrManagement,
    MarketingAnalysis,
    OperationsManagement,
    TechnologyAnalysis,
    DataAnalysis,
    Academic,
    TechnicalReport,
    Summary,
    Documentation,
    Planning,
    Creative,
    General,
}

impl Category {
    /// Get the string identifier for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::StrategicPlanning => "strategic_planning",
            Category::CompetitiveAnalysis => "competitive_analysis",
            Category::SalesAnalysis => "sales_analysis",
            Category::ProductManagement => "product_management",
            Category::UserManagement => "user_management",
            Category::TaskManagement => "task_management",
            Category::FinancialAnalysis => "financial_analysis",
            Category::HrManagement => "hr_management",
            Category::MarketingAnalysis => "marketing_analysis",
            Category::OperationsManagement => "operations_management",
            Category::TechnologyAnalysis => "technology_analysis",
            Category::DataAnalysis => "data_analysis",
            Category::Academic => "academic",
            Category::TechnicalReport => "technical_report",
            Category::Summary => "summary",
            Category::Documentation => "documentation",
            Category::Planning => "planning",
            Category::Creative => "creative",
            Category::General => "general",
        }
    }

    /// All categories, in declaration order
    pub fn all() -> &'static [Category] {
        &[
            Category::StrategicPlanning,
            Category::CompetitiveAnalysis,
            Category::SalesAnalysis,
            Category::ProductManagement,
            Category::UserManagement,
            Category::TaskManagement,
            Category::FinancialAnalysis,
            Category::HrManagement,
            Category::MarketingAnalysis,
            Category::OperationsManagement,
            Category::TechnologyAnalysis,
            Category::DataAnalysis,
            Category::Academic,
            Category::TechnicalReport,
            Category::Summary,
            Category::Documentation,
            Category::Planning,
            Category::Creative,
            Category::General,
        ]
    }

    /// Categories that enter collaboration mode when primary.
    ///
    /// These are the business/operational domains; document-shaped
    /// categories (academic, summary, ...) run the traditional
    /// single-agent path unless the resolver finds collaborators.
    pub fn is_collaborative(&self) -> bool {
        matches!(
            self,
            Category::SalesAnalysis
                | Category::ProductManagement
                | Category::UserManagement
                | Category::TaskManagement
                | Category::StrategicPlanning
                | Category::CompetitiveAnalysis
                | Category::FinancialAnalysis
                | Category::HrManagement
                | Category::MarketingAnalysis
                | Category::OperationsManagement
                | Category::TechnologyAnalysis
        )
    }

    /// Uppercased identifier used as a section label in enriched context
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_roundtrip_for_all_categories() {
        for category in Category::all() {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, *category);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        assert!("market_analysis".parse::<Category>().is_err());
    }

    #[test]
    fn test_collaborative_subset() {
        assert!(Category::StrategicPlanning.is_collaborative());
        assert!(Category::TechnologyAnalysis.is_collaborative());
        assert!(!Category::Summary.is_collaborative());
        assert!(!Category::Creative.is_collaborative());
        assert!(!Category::General.is_collaborative());
    }

    #[test]
    fn test_label_is_uppercased() {
        assert_eq!(Category::SalesAnalysis.label(), "SALES_ANALYSIS");
    }
}
