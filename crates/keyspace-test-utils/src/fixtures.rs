//! Sample trees and stores.

use keyspace_store::MapStore;
use keyspace_tree::Element;

/// The four keys every mapper scenario starts from, in this insertion order:
///
/// | key                 | value |
/// |---------------------|-------|
/// | `config.value1`     | `v1`  |
/// | `config.value2`     | `v2`  |
/// | `config.sub.value1` | `v3`  |
/// | `config.sub.value2` | `v4`  |
pub fn sample_store() -> MapStore {
    [
        ("config.value1", "v1"),
        ("config.value2", "v2"),
        ("config.sub.value1", "v3"),
        ("config.sub.value2", "v4"),
    ]
    .into_iter()
    .collect()
}

/// The same content as [`sample_store`] as a document tree rooted at `<root>`,
/// so `config.sub.value2` resolves to `v4` in both.
pub fn sample_tree() -> Element {
    Element::new("root").with_child(
        Element::new("config")
            .with_child(Element::new("value1").with_text("v1"))
            .with_child(Element::new("value2").with_text("v2"))
            .with_child(
                Element::new("sub")
                    .with_child(Element::new("value1").with_text("v3"))
                    .with_child(Element::new("value2").with_text("v4")),
            ),
    )
}

/// A `<config>` tree exercising every path feature:
///
/// ```xml
/// <config id="main">
///   <prop1>value1</prop1>
///   <prop2>value2</prop2>
///   <prop3>
///     <prop4 attr="value3"/>
///     <prop4 attr="value4"/>
///   </prop3>
///   <prop5>value5</prop5>
///   <prop5>value6</prop5>
///   <!-- comment -->
/// </config>
/// ```
pub fn feature_tree() -> Element {
    Element::new("config")
        .with_attribute("id", "main")
        .with_child(Element::new("prop1").with_text("value1"))
        .with_child(Element::new("prop2").with_text("value2"))
        .with_child(
            Element::new("prop3")
                .with_child(Element::new("prop4").with_attribute("attr", "value3"))
                .with_child(Element::new("prop4").with_attribute("attr", "value4")),
        )
        .with_child(Element::new("prop5").with_text("value5"))
        .with_child(Element::new("prop5").with_text("value6"))
        .with_comment(" comment ")
}
