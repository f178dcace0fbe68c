use super::PromptTable;

pub(super) static TABLE: PromptTable = PromptTable {
    association_both_descriptions: "\
Diga-me se existe uma relação direta ou indireta entre '{term}', cuja descrição é '{term_description}', e '{associative_term}', cuja descrição é '{associative_term_description}'.
",
    association_term_description: "\
Diga-me se existe uma relação direta ou indireta entre '{term}', cuja descrição é '{term_description}', e '{associative_term}'.
",
    association_associative_description: "\
Diga-me se existe uma relação direta ou indireta entre '{term}' e '{associative_term}', cuja descrição é '{associative_term_description}'.
",
    association_without_descriptions: "\
Diga-me se existe uma relação direta ou indireta entre '{term}' e '{associative_term}'.
",
    association_instructions: "
Se existir qualquer motivo para associá-los, seja qual for, considere que há uma relação entre ambos.

A resposta deve estar no formato JSON, seguindo este exemplo:
{\"term\": \"{term}\", \"associative_term\": \"{associative_term}\", \"relationship\": true/false, \"reason\": \"razão pela qual existe ou não relação entre {term} e {associative_term}\"}
",

    generation_without_relationship: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado aos termos '{term}' e '{associative_term}'.
Os textos devem incentivar o leitor a comprar '{term}' porque '{associative_term}' está em alta.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_related_without_descriptions: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado aos termos '{term}' e '{associative_term}'.
Os textos devem incentivar o leitor a comprar '{term}' porque '{associative_term}' está em alta.
Considere que o motivo pelo qual os termos estão relacionados é: '{association_reason}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é '{company}'.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_related_term_description: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado aos termos '{term}', cuja descrição é '{term_description}', e '{associative_term}'.
Os textos devem incentivar o leitor a comprar '{term}' porque '{associative_term}' está em alta.
Considere que o motivo pelo qual os termos estão relacionados é: '{association_reason}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é '{company}'.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_related_associative_description: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado aos termos '{term}' e '{associative_term}', cuja descrição é '{associative_term_description}'.
Os textos devem incentivar o leitor a comprar '{term}' porque '{associative_term}' está em alta.
Considere que o motivo pelo qual os termos estão relacionados é: '{association_reason}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é '{company}'.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_related_both_descriptions: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado aos termos '{term}', cuja descrição é '{term_description}', e '{associative_term}', cuja descrição é '{associative_term_description}'.
Os textos devem incentivar o leitor a comprar '{term}' porque '{associative_term}' está em alta.
Considere que o motivo pelo qual os termos estão relacionados é: '{association_reason}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é '{company}'.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_single_with_description: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado ao termo '{term}', cuja descrição é '{term_description}'.
É de um varejista chamado {company} em {location} e deve convidar o cliente a comprar '{term}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é {company}.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",
    generation_single_without_description: "\
Gere {n} textos com menos de {length} caracteres para um anúncio do Google Ads.
Este anúncio deve estar relacionado ao termo '{term}'.
É de um varejista chamado {company} em {location} e deve convidar o cliente a comprar '{term}'.
Se os textos gerados forem longos, procure incluir o nome do varejista, que é {company}.

A resposta deve estar exatamente no seguinte formato:
[\"escreva aqui o texto 1\", \"escreva aqui o texto 2\", ..., \"escreva aqui o texto {n}\"]
Deve ser apenas uma lista de textos separados por vírgulas entre colchetes, sem quebras de linha ou espaços adicionais.
",

    paths_with_description: "\
Vou fornecer um termo e sua descrição, e você deve gerar um caminho de url dividido em {n} partes para esse termo.
O caminho deve se referir ao termo '{term}' e à sua descrição '{term_description}'.
Cada parte do caminho deve ser muito curta, apenas uma palavra que resuma a ideia principal de '{term}'.

Por exemplo, para o termo 'celulares' com descrição 'Samsung Galaxy S23, Samsung Galaxy S23 Ultra',
a parte 1 pode ser 'celulares' e a parte 2 pode ser 'galaxy-s23': www.ecommerce.com/celulares/galaxy-s23
IMPORTANTE: Não deve conter letras maiúsculas nem espaços; várias palavras devem estar em minúsculas e separadas por hífen.

A resposta deve estar exatamente no seguinte formato:
[\"parte 1 do caminho\", \"parte 2 do caminho\", ..., \"parte {n} do caminho\"]
",
    paths_without_description: "\
Vou fornecer um termo, e você deve gerar um caminho de url dividido em {n} partes para esse termo.
O caminho deve se referir ao termo '{term}'.
Cada parte do caminho deve ser muito curta, apenas uma palavra que resuma a ideia principal de '{term}'.

Por exemplo, para o termo 'celulares', a parte 1 pode ser 'celulares' e a parte 2 pode ser 'smartphones':
www.ecommerce.com/celulares/smartphones
IMPORTANTE: Não deve conter letras maiúsculas nem espaços; várias palavras devem estar em minúsculas e separadas por hífen.

A resposta deve estar exatamente no seguinte formato:
[\"parte 1 do caminho\", \"parte 2 do caminho\", ..., \"parte {n} do caminho\"]
",

    size_enforcement: "\
Darei a você um texto para um anúncio do Google Ads que é muito longo.
Torne-o mais curto, deve ter menos de {max_length} caracteres.
O texto é: {copy}

Dê-me a resposta assim:
texto_abreviado
Basta me dar como resposta o texto abreviado sem aspas, quebras de linha ou qualquer outra coisa.
",
    path_size_enforcement: "\
Darei a você uma lista de partes de caminho para anúncios do Google Ads que podem ser longas demais.
A lista pode ter apenas uma parte ou estar vazia, e ambos os casos são válidos.
Encurte cada parte que tiver mais de {max_length} caracteres e mantenha as que não precisarem.
O texto é: {copy}
Dê-me o resultado no mesmo formato do texto:
[\"parte 1 do caminho\", \"parte 2 do caminho\"]
IMPORTANTE: Não deve conter letras maiúsculas nem espaços; várias palavras devem estar em minúsculas e separadas por hífen.
",
    feature_extraction: "\
Dada a seguinte descrição de produto:
\"{description}\"
Gere uma lista curta das características principais, no seguinte formato:
\"Característica 1\", \"Característica 2\", ..., \"Característica N\"
",
    keywords: "\
Dado o termo '{term}', dê-me uma lista de até 10 palavras-chave para Google Ads relacionadas a esse termo.
A resposta deve estar exatamente no seguinte formato:
[\"Palavra-chave 1\", \"Palavra-chave 2\", ..., \"Palavra-chave N\"]
",
};
