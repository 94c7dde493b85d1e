#![cfg_attr(not(test), no_std)]

pub mod state_machine;
pub mod distribution;
pub mod context;

pub use state_machine::{code, CodingStateMachine, MachineState, ModelError, StateMachineModel};
pub use distribution::{
    rank_table, DistributionAnalysis, DistributionPolicy, FrequencyProfile, OrderScheme,
    FREQUENT_RANK_LIMIT, UNRANKED,
};
pub use context::{
    ContextPolicy, ContextTable, JapaneseContextAnalysis, KanaScheme, CONTEXT_CATEGORIES,
    HIRAGANA_COUNT,
};
