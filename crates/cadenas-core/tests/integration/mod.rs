mod analyze_contract;
mod estimate_contract;
