//! The two small, closed vocabularies the rest of the crate is built on:
//! business relationships between ASes, and the preference they confer on
//! whoever imports a path over them.

/// Business relationship carried by a directed edge of an
/// [`AsGraph`](crate::graph::AsGraph).
///
/// For an edge `exporter -> importer`, the tag describes the exporter's
/// role: `P2C` means the exporter is a provider of the importer, `C2P`
/// means the exporter is a customer of the importer, `P2P` means they peer.
///
/// Ordered so that `P2C < P2P < C2P`, matching the Gao-Rexford notion of
/// "uphill" (customer-to-provider) vs. "downhill" (provider-to-customer)
/// and used by [`crate::valley::is_valley_free`] to check that a path's
/// relationship sequence never goes downhill then back uphill.
///
/// External wire format for a caller's own CAIDA loader (not parsed by this
/// crate — see spec §6): a line `<A>|<B>|-1` denotes `A` provider of `B`
/// (`add_peering(A, B, Relationship::P2C)`); `<A>|<B>|0` denotes a peering
/// (`Relationship::P2P`, same in both directions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum Relationship {
    /// Exporter is a provider of the importer.
    P2C,
    /// Exporter and importer peer.
    P2P,
    /// Exporter is a customer of the importer.
    C2P,
}

impl Relationship {
    /// The tag for the same physical edge walked in the other direction.
    ///
    /// ```
    /// use gaorex::relationship::Relationship;
    /// assert_eq!(Relationship::P2P.reversed(), Relationship::P2P);
    /// assert_eq!(Relationship::P2C.reversed(), Relationship::C2P);
    /// ```
    pub fn reversed(self) -> Relationship {
        match self {
            Relationship::P2C => Relationship::C2P,
            Relationship::C2P => Relationship::P2C,
            Relationship::P2P => Relationship::P2P,
        }
    }
}

/// Preference, at the importing AS, of a path that arrived over a given
/// edge. `CUSTOMER > PEER > PROVIDER > UNKNOWN`, derived solely from the
/// edge's relationship tag — nothing else about the path matters for this
/// ranking, which is what lets the inference engine process edges in three
/// independent phases instead of re-comparing every candidate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub enum PathPref {
    /// No path known yet (also: the state of every announcement source).
    Unknown,
    Provider,
    Peer,
    Customer,
}

impl PathPref {
    /// Compute the preference, at the importer, of a path arriving over the
    /// edge `exporter -> importer` tagged `rel`.
    pub fn from_relationship(rel: Relationship) -> PathPref {
        match rel {
            Relationship::P2C => PathPref::Provider,
            Relationship::P2P => PathPref::Peer,
            Relationship::C2P => PathPref::Customer,
        }
    }
}
