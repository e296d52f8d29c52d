mod supervisor;

pub use supervisor::TrackingSupervisor;

#[cfg(test)]
mod tests;
