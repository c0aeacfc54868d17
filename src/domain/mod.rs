mod amount;
mod category;
mod ledger;
mod record;

pub use amount::*;
pub use category::*;
pub use ledger::*;
pub use record::*;
