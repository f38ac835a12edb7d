mod exponential;
mod nrlmsise00;
