use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// An elementary flow of a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flow {
    pub id: String,
    pub index: usize,
    pub name: String,
    pub category: String,
    pub sub_category: String,
    pub unit: String,
    pub uuid: String,
}

/// The flows of one model, each stored in the slot named by its `index`.
///
/// A slot is empty only when the source file skipped that index. Empty slots
/// serialize as `null` so that the JSON array stays positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlowSet {
    slots: Vec<Option<Flow>>,
}

impl FlowSet {
    pub(crate) fn from_slots(slots: Vec<Option<Flow>>) -> Self {
        Self { slots }
    }

    /// Number of slots, which equals the number of data rows in the source file
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The flow stored at `index`, if that slot is filled
    pub fn get(&self, index: usize) -> Option<&Flow> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Present flows in slot order
    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.slots.iter().flatten()
    }

    /// Finds the first flow whose `id` or `uuid` equals `target`.
    ///
    /// This is a single scan in slot order: a flow matching by `uuid` wins over
    /// a flow at a later index that matches by `id`.
    pub fn find(&self, target: &str) -> Result<&Flow> {
        self.iter()
            .find(|flow| flow.id == target || flow.uuid == target)
            .ok_or_else(|| FlowError::not_found_in_set(target))
    }

    /// Consumes the set, returning all slots in order including empty ones
    pub fn into_flows(self) -> Vec<Option<Flow>> {
        self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn flow(index: usize, id: &str, uuid: &str) -> Flow {
        Flow {
            id: id.to_string(),
            index,
            name: format!("flow {index}"),
            category: "air".to_string(),
            sub_category: "unspecified".to_string(),
            unit: "kg".to_string(),
            uuid: uuid.to_string(),
        }
    }

    #[test]
    fn test_flow_json_field_names() {
        let json = serde_json::to_value(flow(0, "CO2", "u-1")).unwrap();
        assert_eq!(json["id"], "CO2");
        assert_eq!(json["index"], 0);
        assert_eq!(json["subCategory"], "unspecified");
        assert!(json.get("sub_category").is_none());

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_find_by_id_and_uuid() {
        let set = FlowSet::from_slots(vec![
            Some(flow(0, "CO2", "aaa")),
            Some(flow(1, "CH4", "bbb")),
        ]);

        assert_eq!(set.find("CH4").unwrap().index, 1);
        assert_eq!(set.find("aaa").unwrap().index, 0);

        let err = set.find("N2O").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFoundInSet);
    }

    #[test]
    fn test_find_earlier_uuid_match_wins_over_later_id_match() {
        let set = FlowSet::from_slots(vec![
            Some(flow(0, "SO2", "shared")),
            Some(flow(1, "shared", "ccc")),
        ]);

        let found = set.find("shared").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.id, "SO2");
    }

    #[test]
    fn test_empty_slots_are_skipped_and_serialized_as_null() {
        let set = FlowSet::from_slots(vec![None, Some(flow(1, "CO2", "aaa"))]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().count(), 1);
        assert!(set.get(0).is_none());
        assert_eq!(set.find("CO2").unwrap().index, 1);

        let json = serde_json::to_value(&set).unwrap();
        assert!(json[0].is_null());
        assert_eq!(json[1]["id"], "CO2");
    }

    #[test]
    fn test_into_flows_keeps_slot_order_and_gaps() {
        let set = FlowSet::from_slots(vec![Some(flow(0, "CO2", "aaa")), None]);

        let slots = set.into_flows();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].as_ref().unwrap().id, "CO2");
        assert!(slots[1].is_none());
    }

    #[test]
    fn test_flow_deserializes_from_camel_case_json() {
        let parsed: Flow = serde_json::from_str(
            r#"{"id":"CH4","index":1,"name":"Methane","category":"air",
                "subCategory":"unspecified","unit":"kg","uuid":"bbb"}"#,
        )
        .unwrap();
        assert_eq!(parsed.sub_category, "unspecified");
        assert_eq!(parsed.name, "Methane");
        assert_eq!(parsed.index, 1);
        assert_eq!(parsed.uuid, "bbb");
    }
}
