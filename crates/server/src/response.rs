use serde::Serialize;

/// Success envelope: `{code: "success", message, data: {status: 200, ..payload}}`.
#[derive(Serialize, Debug)]
pub struct Success<T: Serialize> {
    pub code: &'static str,
    pub message: &'static str,
    pub data: Data<T>,
}

#[derive(Serialize, Debug)]
pub struct Data<T: Serialize> {
    pub status: u16,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Success<T> {
    pub fn ok(message: &'static str, payload: T) -> Self {
        Self {
            code: "success",
            message,
            data: Data { status: 200, payload },
        }
    }
}
