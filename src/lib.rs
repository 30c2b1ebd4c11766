/*! # kgtext

Standardisation of textual knowledge graph dumps (WN18RR, FB15k-237, Wikidata5M)
into a common schema:

```text
entity_ids.txt
entity_id2name.json
entity_id2description.json
relation_id2name.json
```

Raw files are expected to be already downloaded. The usual flow is
parser -> cleaner -> gap filler (optional) -> truncator (optional) -> writer,
see [pipeline::Standardise]. Each stage can also be used on its own.
!*/
pub mod cleaning;
pub mod datasets;
pub mod error;
pub mod io;
pub mod kg;
pub mod pipeline;
pub mod processing;
pub mod truncation;
