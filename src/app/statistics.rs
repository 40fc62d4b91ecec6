//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{InfoType, ProcessingStats};
use crate::scope::{AssembledScope, Category};

/// Logs the extraction counters that are non-zero.
pub fn print_extraction_statistics(stats: &ProcessingStats) {
    let total_info = stats.total_info();

    if total_info > 0 {
        info!("Extraction Counts ({} total):", total_info);
        for info_type in InfoType::iter() {
            let count = stats.get_info_count(info_type);
            if count > 0 {
                info!("   {}: {}", info_type, count);
            }
        }
    }
}

/// Logs how many assets each category ended up with.
pub fn print_category_summary(scope: &AssembledScope) {
    for category in Category::iter() {
        let count = scope.get(category).map_or(0, <[String]>::len);
        info!("   {}: {}", category, count);
    }
}
