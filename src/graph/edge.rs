use super::*;

pub trait EdgeOps {
    /// Returns the edge with its endpoints ordered, i.e. the representative of an
    /// undirected edge
    fn normalized(&self) -> Self;
    fn reverse(&self) -> Self;
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Edge(pub Node, pub Node);

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl EdgeOps for Edge {
    fn normalized(&self) -> Self {
        if self.0 <= self.1 { *self } else { self.reverse() }
    }

    fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn reverse() {
        assert_eq!(Edge(3, 7).reverse(), Edge(7, 3));
        assert_eq!(Edge(3, 7).reverse().reverse(), Edge(3, 7));
    }

    #[test]
    fn normalized() {
        assert_eq!(Edge(7, 3).normalized(), Edge(3, 7));
        assert_eq!(Edge(3, 7).normalized(), Edge(3, 7));
        assert_eq!(Edge(2, 2).normalized(), Edge(2, 2));
    }
}
