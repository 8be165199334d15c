pub mod question_handlers;
