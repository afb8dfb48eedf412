pub mod events {
    pub mod new_event;
}
