pub mod rsvp;
