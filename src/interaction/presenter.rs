use crate::error::Result;
use crate::search::{BroadProjection, Projection};
use std::io::Write;

/// Final rendering of query results
pub trait Presenter {
    /// Field search results, in match order
    fn present(&mut self, projection: &Projection<'_>) -> Result<()>;

    /// Broad search results keyed by entity type
    fn present_broad(&mut self, projection: &BroadProjection<'_>) -> Result<()>;
}

/// Writes results as JSON, one document per query
#[derive(Debug)]
pub struct JsonPresenter<W> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_json<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, projection: &Projection<'_>) -> Result<()> {
        self.write_json(projection)
    }

    fn present_broad(&mut self, projection: &BroadProjection<'_>) -> Result<()> {
        self.write_json(projection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexTable;
    use crate::models::{Dataset, EntityType};
    use crate::search::ResultProjector;

    fn dataset() -> Dataset {
        Dataset::new(
            serde_json::from_str(r#"[{"_id": "t1", "submitter_id": 1}]"#).unwrap(),
            serde_json::from_str(r#"[{"_id": 1, "name": "Ann"}]"#).unwrap(),
            serde_json::from_str(r#"[{"_id": 101, "name": "Acme"}]"#).unwrap(),
        )
    }

    #[test]
    fn test_field_results_render_as_array() {
        let data = dataset();
        let table = IndexTable::build(&data).unwrap();
        let projection = Projection::Tickets(vec![
            ResultProjector::new(&table).project_ticket(&data.tickets[0]),
        ]);

        let mut presenter = JsonPresenter::new(Vec::new(), false);
        presenter.present(&projection).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["_id"], "t1");
        assert_eq!(value[0]["submitter_name"], "Ann");
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_broad_results_render_keyed_by_entity() {
        let data = dataset();
        let table = IndexTable::build(&data).unwrap();
        let projector = ResultProjector::new(&table);
        let mut broad = BroadProjection::new();
        broad.insert(
            EntityType::Organization,
            Projection::Organizations(vec![projector.project_organization(&data.organizations[0])]),
        );

        let mut presenter = JsonPresenter::new(Vec::new(), true);
        presenter.present_broad(&broad).unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["organizations"][0]["name"], "Acme");
        assert!(value.get("tickets").is_none());
    }
}
