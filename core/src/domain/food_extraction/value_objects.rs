#[derive(Debug, Clone)]
pub struct ExtractFoodsInput {
    pub text: String,
}
