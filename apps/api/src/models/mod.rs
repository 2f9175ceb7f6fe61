pub mod answer_set;
pub mod record;
