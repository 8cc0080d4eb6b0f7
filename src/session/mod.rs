pub mod editor_session;
