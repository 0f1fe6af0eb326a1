// 內建路線：巴西主要城市之間的公路距離 (km)

pub(crate) const BUILTIN_ROUTES: &[(&str, &str, f64)] = &[
    // Sudeste
    ("São Paulo, SP", "Campinas, SP", 99.0),
    ("São Paulo, SP", "Ribeirão Preto, SP", 313.0),
    ("São Paulo, SP", "São José dos Campos, SP", 97.0),
    ("São Paulo, SP", "Santos, SP", 72.0),
    ("Rio de Janeiro, RJ", "Niterói, RJ", 22.0),
    ("Rio de Janeiro, RJ", "Campos dos Goytacazes, RJ", 279.0),
    ("Rio de Janeiro, RJ", "Volta Redonda, RJ", 127.0),
    ("Belo Horizonte, MG", "Uberlândia, MG", 556.0),
    ("Belo Horizonte, MG", "Juiz de Fora, MG", 272.0),
    ("Belo Horizonte, MG", "Montes Claros, MG", 422.0),
    ("Vitória, ES", "Belo Horizonte, MG", 524.0),
    ("Vitória, ES", "Rio de Janeiro, RJ", 521.0),
    ("Vitória, ES", "São Paulo, SP", 882.0),
    // Nordeste
    ("Salvador, BA", "Maceió, AL", 632.0),
    ("Salvador, BA", "Aracaju, SE", 356.0),
    ("Salvador, BA", "João Pessoa, PB", 949.0),
    ("Salvador, BA", "Natal, RN", 1126.0),
    ("Recife, PE", "João Pessoa, PB", 120.0),
    ("Recife, PE", "Maceió, AL", 257.0),
    ("Recife, PE", "Natal, RN", 297.0),
    ("Recife, PE", "Aracaju, SE", 501.0),
    ("Fortaleza, CE", "Natal, RN", 537.0),
    ("Fortaleza, CE", "João Pessoa, PB", 688.0),
    ("Fortaleza, CE", "Teresina, PI", 634.0),
    ("Fortaleza, CE", "São Luís, MA", 1070.0),
    ("São Luís, MA", "Teresina, PI", 446.0),
    ("Maceió, AL", "Aracaju, SE", 294.0),
    ("Maceió, AL", "João Pessoa, PB", 395.0),
    ("João Pessoa, PB", "Natal, RN", 185.0),
    ("Natal, RN", "Mossoró, RN", 281.0),
    // Sul
    ("Curitiba, PR", "Porto Alegre, RS", 710.0),
    ("São Paulo, SP", "Curitiba, PR", 408.0),
    ("Curitiba, PR", "Rio de Janeiro, RJ", 1100.0),
    ("Porto Alegre, RS", "Rio de Janeiro, RJ", 1838.0),
    // Centro-Oeste e Norte
    ("Manaus, AM", "Brasília, DF", 2230.0),
    ("Manaus, AM", "Belém, PA", 1427.0),
    ("Brasília, DF", "Goiânia, GO", 209.0),
    ("Brasília, DF", "Cuiabá, MT", 918.0),
    ("São Paulo, SP", "Cuiabá, MT", 1715.0),
    ("Brasília, DF", "Porto Alegre, RS", 2179.0),
    ("Goiânia, GO", "Belo Horizonte, MG", 699.0),
    ("Belém, PA", "Fortaleza, CE", 1842.0),
    ("São Paulo, SP", "Salvador, BA", 2085.0),
    ("São Paulo, SP", "Recife, PE", 2375.0),
    ("São Paulo, SP", "Fortaleza, CE", 2865.0),
    ("Rio de Janeiro, RJ", "Curitiba, PR", 1100.0),
    ("Rio de Janeiro, RJ", "Porto Alegre, RS", 1838.0),
    ("Brasília, DF", "Salvador, BA", 1621.0),
    ("Belo Horizonte, MG", "Brasília, DF", 716.0),
    ("Brasília, DF", "Rio de Janeiro, RJ", 1150.0),
    ("São Paulo, SP", "Porto Alegre, RS", 1505.0),
    ("Manaus, AM", "Rio de Janeiro, RJ", 3580.0),
    ("Belém, PA", "Rio de Janeiro, RJ", 2870.0),
    ("Recife, PE", "Rio de Janeiro, RJ", 2346.0),
    ("Fortaleza, CE", "Brasília, DF", 2264.0),
];
