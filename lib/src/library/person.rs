use super::{LibraryItem, LibraryOutput, NfoWriter, RenderContext};
use crate::model::{Person, PersonRole};

impl LibraryItem for Person {
    fn write_to_library(&self, _ctx: &RenderContext<'_>, nfo: &mut NfoWriter, _out: &mut LibraryOutput) {
        match &self.role {
            PersonRole::Actor { character } => {
                nfo.open("actor");
                nfo.tag("name", &self.name);
                nfo.tag("role", character);
                nfo.tag("order", &self.order.to_string());
                nfo.tag("thumb", &self.thumb);
                nfo.close();
            }
            PersonRole::Director => nfo.tag("director", &self.name),
            PersonRole::Writer => nfo.tag("credits", &self.name),
            // no tag for these in the NFO format
            PersonRole::Producer | PersonRole::Other(_) => (),
        }
    }
}
