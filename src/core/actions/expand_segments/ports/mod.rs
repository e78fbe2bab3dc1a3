pub mod expansion_rule;
