pub mod twilio;

pub use twilio::{MessageReceipt, MessageSender, OutboundMessage, TwilioClient, TwilioError};
