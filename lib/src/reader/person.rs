use super::{FromXml, ReadContext};
use crate::model::{Person, PersonRole};
use crate::xml::XmlNode;

/// Read a `cast/star` or a `crew/crewmember` node.
///
/// The `order` is left at `0`, it is the position among the media's persons and set by the caller.
impl FromXml for Person {
    fn read_from_xml(node: &XmlNode, ctx: &mut ReadContext<'_>) -> Option<Self> {
        let name = node.path_text(&["person", "displayname"]).trim();
        if name.is_empty() {
            return None;
        }

        let role = match node.name.as_str() {
            "star" => PersonRole::Actor {
                character: node.child_text("character").trim().to_string(),
            },
            "crewmember" => {
                let role = match node.child_text("roleid") {
                    "" => node.child_text("role"),
                    id => id,
                };
                PersonRole::from_crew_role(role)
            }
            other => {
                trace!("Ignoring person in unknown node <{other}>");
                return None;
            }
        };

        Some(Self {
            owner: ctx.owner,
            name: name.to_string(),
            role,
            thumb: node.path_text(&["person", "imageurl"]).trim().to_string(),
            order: 0,
        })
    }
}
