pub mod association;
pub mod blacklist;
pub mod copies;
pub mod features;
pub mod keywords;

pub use association::{Association, AssociationResolver, NO_ASSOCIATION_REASON};
pub use blacklist::{Blacklist, Blacklists};
pub use copies::CopyGenerator;
pub use features::FeatureExtractor;
pub use keywords::{KeywordGenerator, KeywordSupplier, NoKeywordSupplier, MAX_KEYWORDS};
