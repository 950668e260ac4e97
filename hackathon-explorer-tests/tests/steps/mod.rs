mod filter_steps;
mod hackathon_steps;
mod store_steps;
