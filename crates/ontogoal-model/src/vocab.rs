//! Well-known IRIs.

pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";

/// Default namespace for the disposition/affordance vocabulary.
pub const NS_DFL: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#";

pub const HAS_DISPOSITION: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#hasDisposition";
pub const IS_DISPOSITION_OF: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#isDispositionOf";
pub const HAS_PART: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#hasPart";
pub const IS_PART_OF: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#isPartOf";
pub const HAS_CONSTITUENT: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#hasConstituent";
pub const IS_CONSTITUENT_OF: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#isConstituentOf";
pub const IS_INSTANCE_OF: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#isInstanceOf";
pub const IS_SUBCLASS_OF: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#isSubclassOf";
pub const USE_MATCH: &str = "http://www.ease-crc.org/ont/SOMA_DFL.owl#useMatch";
