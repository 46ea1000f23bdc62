pub mod article;
pub mod feed;
pub mod state;

pub use article::Article;
pub use feed::{CategoryEntry, CategoryFeed};
pub use state::{LookupState, Meaning, SelectionState, SummaryState};
