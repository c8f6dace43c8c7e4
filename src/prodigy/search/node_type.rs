use std::fmt;

/// How a stored score relates to the true value of the position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NodeType {
    /// Exact score.
    Pv,
    /// Lower bound, the node failed high.
    Cut,
    /// Upper bound, no move raised alpha.
    All,
}

impl NodeType {
    #[inline]
    pub const fn index(i: usize) -> NodeType {
        if i < Self::COUNT {
            return Self::ALL[i];
        }

        panic!("NodeType::index(): Index out of bounds");
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<NodeType> {
        if i < Self::COUNT {
            return Some(Self::ALL[i]);
        }

        None
    }

    pub const COUNT: usize = 3;
    pub const ALL: [NodeType; Self::COUNT] = [NodeType::Pv, NodeType::Cut, NodeType::All];
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            NodeType::Pv => "PV",
            NodeType::Cut => "CUT",
            NodeType::All => "ALL",
        })
    }
}

#[test]
fn validate_node_type() {
    for (i, node_type) in NodeType::ALL.into_iter().enumerate() {
        assert_eq!(node_type as usize, i);
        assert_eq!(NodeType::index(i), node_type);
    }

    assert_eq!(NodeType::try_index(3), None);
    assert_eq!(NodeType::Pv.to_string(), "PV");
    assert_eq!(NodeType::Cut.to_string(), "CUT");
    assert_eq!(NodeType::All.to_string(), "ALL");
}
