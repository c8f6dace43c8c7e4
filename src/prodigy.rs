pub use prodigy_chess::*;

mod search {
    mod controller;
    mod node_type;
    mod random;
    mod searcher;
    mod state;

    pub use controller::*;
    pub use node_type::*;
    pub use random::*;
    pub use searcher::*;
    pub use state::*;
}

mod tt {
    mod bucket;
    mod entry;
    mod table;
    mod value;

    pub use bucket::*;
    pub use entry::*;
    pub use table::*;
    pub use value::*;
}

pub use search::*;
pub use tt::*;
