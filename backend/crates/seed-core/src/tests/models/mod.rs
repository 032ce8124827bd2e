mod equipment;
mod fitness_goal;
mod gender;
mod identity;
mod injury;
mod profile;
