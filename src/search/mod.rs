//! Terminal search over a system network and flow aggregation of its result.
//!
//! - [connectors_of]: where an element keeps its connectors.
//! - [find_terminals] / [TerminalSearch]: depth-first walk collecting target-category elements.
//! - [total_flow]: sum, convert and round the flow of the collected elements.

mod connectors;
mod find_terminals;
#[cfg(test)]
pub(crate) mod test_networks;
mod total_flow;

pub use connectors::connectors_of;
pub use find_terminals::{SearchOutcome, TerminalSearch, find_terminals};
pub use total_flow::{CUBIC_FEET_TO_LITRES, FLOW_DIGITS, round_half_even, total_flow};
