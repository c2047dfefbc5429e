use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;

pub type CodePoint = char;
pub type StaticString = &'static str;

/// Code point -> "active" flag. `false` marks a key suppressed by intersection.
pub type CharTable = FastHashMap<CodePoint, bool>;

/// Lookahead window of the expander.
pub type Lookahead = SmallVec<[CodePoint; 3]>;
