//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::dataset::load::{load, load_from_path};
pub use crate::dataset::registry::DatasetRegistry;
pub use crate::estimation::interval::{effective_confidence, estimate_interval, student_t_interval};
pub use crate::hypothesis::evaluate::evaluate;
pub use crate::hypothesis::one_sided::one_sided_test;
pub use crate::hypothesis::t_test::{p_value, t_statistic};
pub use crate::hypothesis::two_sided::two_sided_test;
pub use crate::summary::annotation::interval_annotation;
pub use crate::summary::format::{format_bound, format_p_value};
pub use crate::summary::screen_reader::histogram_description;
pub use crate::summary::statements::{alternative_hypothesis, null_hypothesis};
pub use crate::verdict::evaluate as judge;
