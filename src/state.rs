use crate::resolver::PlaytimeResolver;

pub struct AppState {
  pub resolver: PlaytimeResolver,
}
