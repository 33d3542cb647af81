mod history_query;
mod message_record;

pub use history_query::HistoryQuery;
pub use message_record::MessageRecord;
