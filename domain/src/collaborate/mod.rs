//! Collaboration resolution
//!
//! A static affinity table maps a primary category to the categories
//! whose analysis should feed its synthesis. Only the business and
//! operational categories have rows; document-shaped categories
//! collaborate only when the multi-detector found something.

use crate::classify::Category;

/// Affinity table: primary category → supporting categories.
const AFFINITY_TABLE: &[(Category, &[Category])] = &[
    (
        Category::StrategicPlanning,
        &[
            Category::CompetitiveAnalysis,
            Category::FinancialAnalysis,
            Category::MarketingAnalysis,
        ],
    ),
    (
        Category::CompetitiveAnalysis,
        &[
            Category::StrategicPlanning,
            Category::SalesAnalysis,
            Category::MarketingAnalysis,
        ],
    ),
    (
        Category::SalesAnalysis,
        &[
            Category::CompetitiveAnalysis,
            Category::ProductManagement,
            Category::UserManagement,
        ],
    ),
    (
        Category::ProductManagement,
        &[
            Category::UserManagement,
            Category::TechnologyAnalysis,
            Category::SalesAnalysis,
        ],
    ),
    (
        Category::UserManagement,
        &[
            Category::ProductManagement,
            Category::MarketingAnalysis,
            Category::DataAnalysis,
        ],
    ),
    (
        Category::FinancialAnalysis,
        &[
            Category::StrategicPlanning,
            Category::SalesAnalysis,
            Category::OperationsManagement,
        ],
    ),
    (
        Category::MarketingAnalysis,
        &[
            Category::CompetitiveAnalysis,
            Category::UserManagement,
            Category::DataAnalysis,
        ],
    ),
    (
        Category::OperationsManagement,
        &[
            Category::FinancialAnalysis,
            Category::TechnologyAnalysis,
            Category::HrManagement,
        ],
    ),
    (
        Category::TechnologyAnalysis,
        &[
            Category::ProductManagement,
            Category::OperationsManagement,
            Category::DataAnalysis,
        ],
    ),
    (
        Category::HrManagement,
        &[
            Category::OperationsManagement,
            Category::StrategicPlanning,
            Category::FinancialAnalysis,
        ],
    ),
];

/// Resolve the collaborator list for a primary category.
///
/// Union of the affinity row (if any) with the detected categories,
/// minus the primary itself. The result is a deduplicated list with a
/// deterministic order: affinity row first, then detected categories
/// in their detection order.
pub fn resolve_collaborators(primary: Category, detected: &[Category]) -> Vec<Category> {
    let mut collaborators: Vec<Category> = Vec::new();

    if let Some((_, affine)) = AFFINITY_TABLE.iter().find(|(cat, _)| *cat == primary) {
        collaborators.extend_from_slice(affine);
    }

    for category in detected {
        if !collaborators.contains(category) {
            collaborators.push(*category);
        }
    }

    collaborators.retain(|c| *c != primary);
    collaborators
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategic_planning_row() {
        let collaborators = resolve_collaborators(Category::StrategicPlanning, &[]);
        assert!(collaborators.contains(&Category::CompetitiveAnalysis));
        assert!(collaborators.contains(&Category::FinancialAnalysis));
        assert!(!collaborators.contains(&Category::StrategicPlanning));
    }

    #[test]
    fn test_primary_is_removed_from_detected() {
        let collaborators = resolve_collaborators(
            Category::SalesAnalysis,
            &[Category::SalesAnalysis, Category::MarketingAnalysis],
        );
        assert!(!collaborators.contains(&Category::SalesAnalysis));
        assert!(collaborators.contains(&Category::MarketingAnalysis));
    }

    #[test]
    fn test_unmapped_primary_uses_detected_only() {
        let collaborators =
            resolve_collaborators(Category::Summary, &[Category::DataAnalysis, Category::Summary]);
        assert_eq!(collaborators, vec![Category::DataAnalysis]);
    }

    #[test]
    fn test_detected_categories_are_deduplicated_against_affinity() {
        let collaborators = resolve_collaborators(
            Category::StrategicPlanning,
            &[Category::CompetitiveAnalysis, Category::DataAnalysis],
        );
        let competitive_count = collaborators
            .iter()
            .filter(|c| **c == Category::CompetitiveAnalysis)
            .count();
        assert_eq!(competitive_count, 1);
        assert!(collaborators.contains(&Category::DataAnalysis));
    }

    #[test]
    fn test_deterministic_order() {
        let a = resolve_collaborators(Category::HrManagement, &[Category::DataAnalysis]);
        let b = resolve_collaborators(Category::HrManagement, &[Category::DataAnalysis]);
        assert_eq!(a, b);
        assert_eq!(a[0], Category::OperationsManagement);
    }
}
