mod bootstrap;
mod declaration;
mod increment;
mod suffix;

pub use bootstrap::BootstrapRule;
pub use declaration::DeclarationRule;
pub use increment::StrictIncrementRule;
pub use suffix::SuffixRule;

use super::{CheckContext, CheckResult};
use crate::Result;

pub trait CheckRule {
    /// # Errors
    ///
    /// Returns an error if the rule check cannot be completed.
    fn check(&self, context: &CheckContext, result: &mut CheckResult) -> Result<()>;
}
