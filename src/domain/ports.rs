use crate::domain::model::BuildingFacts;

/// One way of answering a question about a building.
pub trait AnswerStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn respond(&self, question: &str, facts: &BuildingFacts) -> String;
}
